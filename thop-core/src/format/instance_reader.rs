#[cfg(test)]
#[path = "../../tests/unit/format/instance_reader_test.rs"]
mod instance_reader_test;

use super::ParseError;
use crate::models::{City, Instance, InstanceMeta, Item};
use crate::utils::Float;
use std::io::{BufRead, BufReader, Read};

/// A trait to read THOP instance.
pub trait ThopProblem {
    /// Reads THOP instance.
    fn read_thop(self) -> Result<Instance, ParseError>;
}

impl<R: Read> ThopProblem for BufReader<R> {
    fn read_thop(self) -> Result<Instance, ParseError> {
        ThopReader::new(self).read_instance()
    }
}

impl ThopProblem for String {
    fn read_thop(self) -> Result<Instance, ParseError> {
        ThopReader::new(BufReader::new(self.as_bytes())).read_instance()
    }
}

struct Header {
    meta: InstanceMeta,
    dimension: usize,
    items_size: usize,
}

struct ThopReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
    line: usize,
}

impl<R: Read> ThopReader<R> {
    fn new(reader: BufReader<R>) -> Self {
        Self { buffer: String::new(), reader, line: 0 }
    }

    fn read_instance(&mut self) -> Result<Instance, ParseError> {
        let header = self.read_header()?;
        let cities = self.read_cities(header.dimension)?;
        let items = self.read_items(header.items_size, header.dimension)?;
        self.read_tail()?;

        Instance::new(header.meta, cities, items).map_err(|err| ParseError::new(err.to_string()))
    }

    fn read_header(&mut self) -> Result<Header, ParseError> {
        let name = self.read_key_value("PROBLEM NAME")?;
        let knapsack_data_type = self.read_key_value("KNAPSACK DATA TYPE")?;
        let dimension = self.read_key_value("DIMENSION").and_then(|value| self.parse_count(&value, "DIMENSION"))?;
        let items_size =
            self.read_key_value("NUMBER OF ITEMS").and_then(|value| self.parse_count(&value, "NUMBER OF ITEMS"))?;
        let capacity = self
            .read_key_value("CAPACITY OF KNAPSACK")
            .and_then(|value| self.parse_real(&value, "CAPACITY OF KNAPSACK"))?;
        let max_time = self.read_key_value("MAX TIME").and_then(|value| self.parse_real(&value, "MAX TIME"))?;
        let min_speed = self.read_key_value("MIN SPEED").and_then(|value| self.parse_real(&value, "MIN SPEED"))?;
        let max_speed = self.read_key_value("MAX SPEED").and_then(|value| self.parse_real(&value, "MAX SPEED"))?;
        let edge_weight_type = self.read_key_value("EDGE_WEIGHT_TYPE")?;

        if dimension == 0 {
            return Err(ParseError::at_line(3, "DIMENSION should be positive"));
        }

        Ok(Header {
            meta: InstanceMeta { name, knapsack_data_type, edge_weight_type, capacity, max_time, min_speed, max_speed },
            dimension,
            items_size,
        })
    }

    fn read_cities(&mut self, dimension: usize) -> Result<Vec<City>, ParseError> {
        self.read_section("NODE_COORD_SECTION")?;

        (1..=dimension)
            .map(|expected| {
                let data = self.read_record(3, expected, "coord")?;

                Ok(City {
                    index: expected,
                    x: self.parse_real(data[1].as_str(), "coord.x")?,
                    y: self.parse_real(data[2].as_str(), "coord.y")?,
                })
            })
            .collect()
    }

    fn read_items(&mut self, items_size: usize, dimension: usize) -> Result<Vec<Item>, ParseError> {
        self.read_section("ITEMS SECTION")?;

        (1..=items_size)
            .map(|expected| {
                let data = self.read_record(4, expected, "item")?;

                let profit = self.parse_real(data[1].as_str(), "item profit")?;
                let weight = self.parse_real(data[2].as_str(), "item weight")?;
                let city = self.parse_count(data[3].as_str(), "item city")?;

                if profit < 0. || weight < 0. {
                    return Err(ParseError::at_line(self.line, "item profit and weight should be non-negative"));
                }

                if city < 1 || city > dimension {
                    return Err(ParseError::at_line(self.line, format!("item is assigned to unknown city: {city}")));
                }

                Ok(Item { index: expected, profit, weight, city })
            })
            .collect()
    }

    /// Ensures that nothing except blank lines or an optional EOF marker follows the records.
    fn read_tail(&mut self) -> Result<(), ParseError> {
        while let Some(line) = self.try_read_line()?.map(|line| line.trim().to_string()) {
            if !line.is_empty() && line != "EOF" {
                return Err(ParseError::at_line(
                    self.line,
                    format!("unexpected data after the last declared item: '{line}'"),
                ));
            }
        }

        Ok(())
    }

    fn read_record(&mut self, arity: usize, expected: usize, kind: &str) -> Result<Vec<String>, ParseError> {
        let line = self.read_line()?.trim().to_string();
        let data = line.split_whitespace().map(|value| value.to_string()).collect::<Vec<_>>();

        if data.len() != arity {
            return Err(ParseError::at_line(self.line, format!("unexpected {kind} data: '{line}'")));
        }

        let index = self.parse_count(data[0].as_str(), "index")?;
        if index != expected {
            return Err(ParseError::at_line(
                self.line,
                format!("unexpected {kind} index, expecting: {expected}, got: {index}"),
            ));
        }

        Ok(data)
    }

    fn read_key_value(&mut self, expected_key: &str) -> Result<String, ParseError> {
        let line = self.read_line()?.clone();
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| ParseError::at_line(self.line, format!("expected colon separated string, got: '{}'", line.trim())))?;

        let actual_key = key.split_whitespace().collect::<Vec<_>>().join(" ");
        if actual_key != expected_key {
            return Err(ParseError::at_line(
                self.line,
                format!("unexpected key, expecting: '{expected_key}', got: '{actual_key}'"),
            ));
        }

        Ok(value.trim().to_string())
    }

    fn read_section(&mut self, expected: &str) -> Result<(), ParseError> {
        let line = self.read_line()?.trim().to_string();
        if line.starts_with(expected) {
            Ok(())
        } else {
            Err(ParseError::at_line(self.line, format!("expecting {expected}, got: '{line}'")))
        }
    }

    fn read_line(&mut self) -> Result<&String, ParseError> {
        let line = self.line + 1;
        match self.try_read_line()? {
            Some(buffer) => Ok(buffer),
            None => Err(ParseError::at_line(line, "unexpected end of file")),
        }
    }

    fn try_read_line(&mut self) -> Result<Option<&String>, ParseError> {
        self.buffer.clear();
        let read = self
            .reader
            .read_line(&mut self.buffer)
            .map_err(|err| ParseError::at_line(self.line + 1, format!("cannot read line: '{err}'")))?;

        if read == 0 {
            Ok(None)
        } else {
            self.line += 1;
            Ok(Some(&self.buffer))
        }
    }

    fn parse_count(&self, data: &str, field: &str) -> Result<usize, ParseError> {
        data.trim()
            .parse::<usize>()
            .map_err(|err| ParseError::at_line(self.line, format!("cannot parse {field}: '{err}'")))
    }

    fn parse_real(&self, data: &str, field: &str) -> Result<Float, ParseError> {
        let value = data
            .trim()
            .parse::<Float>()
            .map_err(|err| ParseError::at_line(self.line, format!("cannot parse {field}: '{err}'")))?;

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ParseError::at_line(self.line, format!("cannot parse {field}: 'non-finite value'")))
        }
    }
}
