#[cfg(test)]
#[path = "../../tests/unit/format/solution_reader_test.rs"]
mod solution_reader_test;

use super::ParseError;
use crate::models::Solution;
use std::io::{BufRead, BufReader, Read};

/// A trait to read a THOP solution.
pub trait SolutionReader {
    /// Reads a solution: the first line keeps visited cities, the second one collected items.
    fn read_solution(self) -> Result<Solution, ParseError>;
}

impl<R: Read> SolutionReader for BufReader<R> {
    fn read_solution(self) -> Result<Solution, ParseError> {
        let lines = self
            .lines()
            .enumerate()
            .map(|(idx, line)| line.map_err(|err| ParseError::at_line(idx + 1, format!("cannot read line: '{err}'"))))
            .collect::<Result<Vec<_>, _>>()?;

        read_solution_lines(lines.iter().map(|line| line.as_str()))
    }
}

impl SolutionReader for String {
    fn read_solution(self) -> Result<Solution, ParseError> {
        read_solution_lines(self.lines())
    }
}

impl SolutionReader for &str {
    fn read_solution(self) -> Result<Solution, ParseError> {
        read_solution_lines(self.lines())
    }
}

fn read_solution_lines<'a>(mut lines: impl Iterator<Item = &'a str>) -> Result<Solution, ParseError> {
    let cities = lines.next().ok_or_else(|| ParseError::at_line(1, "missing line with visited cities"))?;
    let items = lines.next().ok_or_else(|| ParseError::at_line(2, "missing line with collected items"))?;

    if let Some((idx, line)) = lines.enumerate().find(|(_, line)| !line.trim().is_empty()) {
        return Err(ParseError::at_line(idx + 3, format!("unexpected data after collected items: '{}'", line.trim())));
    }

    Ok(Solution { cities: parse_index_list(cities, 1)?, items: parse_index_list(items, 2)? })
}

/// Parses a list of integers separated by commas and/or whitespaces with optional surrounding brackets.
fn parse_index_list(line: &str, line_number: usize) -> Result<Vec<i64>, ParseError> {
    let line = line.trim();

    let inner = match (line.strip_prefix('['), line.ends_with(']')) {
        (Some(rest), true) => &rest[..rest.len() - 1],
        (None, false) => line,
        _ => return Err(ParseError::at_line(line_number, format!("unbalanced brackets: '{line}'"))),
    };

    inner
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|err| ParseError::at_line(line_number, format!("cannot parse index '{token}': '{err}'")))
        })
        .collect()
}
