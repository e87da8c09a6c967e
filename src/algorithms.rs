//! Extracting canonical edge sets from graphs and founder paths.

use crate::{Edge, EdgeSet};

use gbwt::{GBZ, Orientation};

use std::io::BufRead;

//-----------------------------------------------------------------------------

/// GFA record type for links.
const GFA_LINK: &[u8] = b"L";

/// Minimum number of fields in a GFA link line.
const GFA_LINK_FIELDS: usize = 5;

/// Field separator in GFA and founder files.
const FIELD_SEPARATOR: u8 = b'\t';

/// Index of the field storing the path in a founder line.
const FOUNDER_PATH_FIELD: usize = 1;

//-----------------------------------------------------------------------------

/// Statistics from parsing an input file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Number of lines read.
    pub lines: usize,
    /// Number of records that contributed to the edge set.
    pub records: usize,
    /// Number of raw edges inserted, including duplicates.
    pub raw_edges: usize,
}

//-----------------------------------------------------------------------------

/// Builds the canonical edge set from the links in the given GFA input.
///
/// Lines other than links are ignored.
/// Returns an error if reading the input fails or if a link cannot be parsed.
pub fn parse_gfa_links<R: BufRead>(reader: R) -> Result<(EdgeSet, ParseStats), String> {
    let mut edges = EdgeSet::new();
    let mut stats = ParseStats::default();
    for (i, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(|e| format!("Error reading GFA line {}: {}", i + 1, e))?;
        stats.lines += 1;
        let line = trim_line(&line);
        let fields: Vec<&[u8]> = line.split(|&c| c == FIELD_SEPARATOR).collect();
        if fields[0] != GFA_LINK {
            continue;
        }
        if fields.len() < GFA_LINK_FIELDS {
            return Err(format!("Error parsing GFA line {}: not enough fields for a link", i + 1));
        }
        let edge = parse_link(&fields).map_err(|e| format!("Error parsing GFA line {}: {}", i + 1, e))?;
        edges.insert(edge);
        stats.records += 1;
        stats.raw_edges += 1;
    }

    Ok((edges, stats))
}

/// Builds the canonical edge set from the paths in the given founder input.
///
/// Each non-empty line is `name<TAB>path`, where the path is a sequence of `>id` and `<id` steps.
/// Every pair of consecutive steps on the same line is an edge.
/// Returns an error if reading the input fails, if a line has no path field, or if a node id is invalid.
pub fn parse_founders<R: BufRead>(reader: R) -> Result<(EdgeSet, ParseStats), String> {
    let mut edges = EdgeSet::new();
    let mut stats = ParseStats::default();
    for (i, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(|e| format!("Error reading founder line {}: {}", i + 1, e))?;
        stats.lines += 1;
        let line = trim_line(&line);
        if line.is_empty() {
            continue;
        }
        let field = line.split(|&c| c == FIELD_SEPARATOR).nth(FOUNDER_PATH_FIELD).ok_or_else(|| {
            format!("Error parsing founder line {}: no path field", i + 1)
        })?;
        let path = parse_path(field).map_err(|e| format!("Error parsing founder line {}: {}", i + 1, e))?;
        if path.is_empty() {
            continue;
        }
        stats.records += 1;
        for edge in path_edges(&path) {
            edges.insert(edge);
            stats.raw_edges += 1;
        }
    }

    Ok((edges, stats))
}

/// Builds the canonical edge set from the edges of the given GBZ graph.
pub fn gbz_edges(graph: &GBZ) -> (EdgeSet, ParseStats) {
    let mut edges = EdgeSet::new();
    let mut stats = ParseStats::default();
    for from in graph.node_iter() {
        stats.records += 1;
        for from_o in [Orientation::Forward, Orientation::Reverse] {
            let successors = match graph.successors(from, from_o) {
                Some(iter) => iter,
                None => continue,
            };
            for (to, to_o) in successors {
                edges.insert(Edge::new(from, from_o, to, to_o));
                stats.raw_edges += 1;
            }
        }
    }
    (edges, stats)
}

//-----------------------------------------------------------------------------

/// Parses the steps of a path string.
///
/// A step is `>` (forward) or `<` (reverse) immediately followed by one or more digits.
/// Other characters, including markers without digits, are skipped.
/// Returns an error if a node id does not fit in `usize`.
///
/// # Examples
///
/// ```
/// use founder_check::algorithms::parse_path;
/// use gbwt::Orientation;
///
/// let path = parse_path(b">1<23x>4").unwrap();
/// assert_eq!(path, vec![
///     (1, Orientation::Forward),
///     (23, Orientation::Reverse),
///     (4, Orientation::Forward),
/// ]);
/// ```
pub fn parse_path(field: &[u8]) -> Result<Vec<(usize, Orientation)>, String> {
    let mut result = Vec::new();
    let mut i = 0;
    while i < field.len() {
        let orientation = match field[i] {
            b'>' => Orientation::Forward,
            b'<' => Orientation::Reverse,
            _ => {
                i += 1;
                continue;
            }
        };
        let start = i + 1;
        let mut end = start;
        while end < field.len() && field[end].is_ascii_digit() {
            end += 1;
        }
        if end > start {
            let id = parse_node_id(&field[start..end])?;
            result.push((id, orientation));
        }
        i = end;
    }
    Ok(result)
}

/// Returns the raw edges between consecutive steps of the path.
///
/// A path with `k` steps has `k - 1` edges.
pub fn path_edges(path: &[(usize, Orientation)]) -> impl Iterator<Item = Edge> + '_ {
    path.windows(2).map(|pair| Edge::new(pair[0].0, pair[0].1, pair[1].0, pair[1].1))
}

//-----------------------------------------------------------------------------

/// Parses the orientation from a GFA field.
pub fn parse_orientation(field: &[u8]) -> Result<Orientation, String> {
    match field {
        b"+" => Ok(Orientation::Forward),
        b"-" => Ok(Orientation::Reverse),
        _ => Err(format!("Invalid orientation: {}", String::from_utf8_lossy(field))),
    }
}

/// Parses a node id from a string of digits.
pub fn parse_node_id(field: &[u8]) -> Result<usize, String> {
    let invalid = || format!("Invalid node id: {}", String::from_utf8_lossy(field));
    if field.is_empty() || !field.iter().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let field = std::str::from_utf8(field).map_err(|_| invalid())?;
    field.parse::<usize>().map_err(|_| invalid())
}

// Parses the edge from the fields of a link line.
fn parse_link(fields: &[&[u8]]) -> Result<Edge, String> {
    let from = parse_node_id(fields[1])?;
    let from_o = parse_orientation(fields[2])?;
    let to = parse_node_id(fields[3])?;
    let to_o = parse_orientation(fields[4])?;
    Ok(Edge::new(from, from_o, to, to_o))
}

// Removes the carriage return from a CRLF line ending.
fn trim_line(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

//-----------------------------------------------------------------------------


//-----------------------------------------------------------------------------
