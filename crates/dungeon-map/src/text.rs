//! Loading maps from ASCII text.
//!
//! | Char | Meaning |
//! |---|---|
//! | `#` | wall |
//! | `.` or space | empty floor |
//! | `P` | entry (player start), on floor |
//! | `E` | exit, on floor |
//! | `C` | chest, on floor |
//!
//! Every line must have the same width. Exactly one `P` and one `E` are
//! required; any number of `C`s is allowed.

use std::fmt;

use dungeon_core::Point;

use crate::map::{Map, MapCell};

impl Map {
    /// Parse a map from newline-separated text.
    ///
    /// Blank lines before the first row are skipped. `\r\n` endings and a
    /// trailing newline are accepted.
    pub fn from_text(s: &str) -> Result<Self, MapError> {
        let lines: Vec<&str> = s.lines().skip_while(|l| l.is_empty()).collect();
        Self::from_lines(&lines)
    }

    /// Parse a map from one string per row.
    pub fn from_lines(lines: &[&str]) -> Result<Self, MapError> {
        let Some(first) = lines.first() else {
            return Err(MapError::Empty);
        };
        let width = first.chars().count();
        if width == 0 && lines.iter().all(|l| l.is_empty()) {
            return Err(MapError::Empty);
        }

        let mut map = Map::new(width as i32, lines.len() as i32);
        let mut entry = None;
        let mut exit = None;

        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MapError::InconsistentSize {
                    line: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match ch {
                    '#' => map.set(p, MapCell::Wall),
                    '.' | ' ' => {}
                    'P' => {
                        if entry.replace(p).is_some() {
                            return Err(MapError::DuplicateEntry { pos: p });
                        }
                    }
                    'E' => {
                        if exit.replace(p).is_some() {
                            return Err(MapError::DuplicateExit { pos: p });
                        }
                    }
                    'C' => {
                        map.add_chest(p);
                    }
                    _ => return Err(MapError::InvalidRune { ch, pos: p }),
                }
            }
        }

        map.set_initial_position(entry.ok_or(MapError::MissingEntry)?);
        map.set_exit(exit.ok_or(MapError::MissingExit)?);
        log::debug!(
            "loaded {}x{} map with {} chests",
            map.width(),
            map.height(),
            map.chests().len()
        );
        Ok(map)
    }
}

/// Errors that can occur when parsing a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// No rows, or only zero-width rows.
    Empty,
    /// Row `line` (0-based) does not have the width of the first row.
    InconsistentSize {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the map alphabet was found.
    InvalidRune {
        ch: char,
        pos: Point,
    },
    MissingEntry,
    MissingExit,
    /// A second `P` was found at `pos`.
    DuplicateEntry { pos: Point },
    /// A second `E` was found at `pos`.
    DuplicateExit { pos: Point },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: empty"),
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {} is {found} wide, expected {expected}",
                line + 1
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "map contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingEntry => write!(f, "map: no entry (P)"),
            Self::MissingExit => write!(f, "map: no exit (E)"),
            Self::DuplicateEntry { pos } => write!(f, "map: second entry (P) at {pos}"),
            Self::DuplicateExit { pos } => write!(f, "map: second exit (E) at {pos}"),
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
#####
#P.C#
#.#.#
#C.E#
#####";

    #[test]
    fn parse_and_size() {
        let m = Map::from_text(ROOM).unwrap();
        assert_eq!(m.size(), Point::new(5, 5));
        assert_eq!(m.initial_position(), Point::new(1, 1));
        assert_eq!(m.exit(), Point::new(3, 3));
        assert_eq!(m.chests(), &[Point::new(3, 1), Point::new(1, 3)]);
        assert_eq!(m.count(MapCell::Wall), 17);
        assert_eq!(m.at(Point::new(1, 1)), Some(MapCell::Empty));
        assert_eq!(m.at(Point::new(2, 2)), Some(MapCell::Wall));
    }

    #[test]
    fn spaces_are_floor() {
        let m = Map::from_lines(&["P  ", "# E"]).unwrap();
        assert_eq!(m.count(MapCell::Wall), 1);
        assert_eq!(m.exit(), Point::new(2, 1));
    }

    #[test]
    fn crlf_and_trailing_newline() {
        let m = Map::from_text("P.\r\n.E\r\n").unwrap();
        assert_eq!(m.size(), Point::new(2, 2));
    }

    #[test]
    fn render_round_trip() {
        let m = Map::from_text(ROOM).unwrap();
        assert_eq!(m.to_string(), ROOM);
        assert_eq!(Map::from_text(&m.to_string()).unwrap(), m);
    }

    #[test]
    fn inconsistent_size_error() {
        let err = Map::from_text("P.\n.E.").unwrap_err();
        assert_eq!(
            err,
            MapError::InconsistentSize {
                line: 1,
                expected: 2,
                found: 3
            }
        );
        assert_eq!(err.to_string(), "map: line 2 is 3 wide, expected 2");
    }

    #[test]
    fn invalid_rune_error() {
        let err = Map::from_text("P.\n.X").unwrap_err();
        assert_eq!(
            err,
            MapError::InvalidRune {
                ch: 'X',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn entry_and_exit_required_once() {
        assert_eq!(
            Map::from_text("..\n.E").unwrap_err(),
            MapError::MissingEntry
        );
        assert_eq!(
            Map::from_text("P.\n..").unwrap_err(),
            MapError::MissingExit
        );
        assert_eq!(
            Map::from_text("PP\n.E").unwrap_err(),
            MapError::DuplicateEntry {
                pos: Point::new(1, 0)
            }
        );
        assert_eq!(
            Map::from_text("PE\nE.").unwrap_err(),
            MapError::DuplicateExit {
                pos: Point::new(0, 1)
            }
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(Map::from_text("").unwrap_err(), MapError::Empty);
        assert_eq!(Map::from_lines(&[""]).unwrap_err(), MapError::Empty);
        assert_eq!(Map::from_text("\n\n").unwrap_err(), MapError::Empty);
    }

    #[test]
    fn leading_blank_lines_skipped() {
        let m = Map::from_text("\nP.\n.E").unwrap();
        assert_eq!(m.size(), Point::new(2, 2));
        assert_eq!(m.initial_position(), Point::new(0, 0));
        assert_eq!(m.exit(), Point::new(1, 1));
    }

    #[test]
    fn blank_first_row_is_a_size_error() {
        assert_eq!(
            Map::from_lines(&["", "P.", ".E"]).unwrap_err(),
            MapError::InconsistentSize {
                line: 1,
                expected: 0,
                found: 2
            }
        );
    }
}
