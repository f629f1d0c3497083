//! Renders a feasible solution as an svg image: the path is drawn with a stroke which grows with
//! carried weight, cities are drawn with a size proportional to profit of their items.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/draw/draw_test.rs"]
mod draw_test;

use plotters::prelude::*;
use std::io::{BufWriter, Write};
use thop_core::evaluation::{Travel, trace_solution};
use thop_core::models::{Instance, Solution};
use thop_core::utils::{Float, GenericError, GenericResult};

type DrawResult<T> = Result<T, Box<dyn std::error::Error>>;

const IMAGE_SIZE: Float = 800.;
const PADDING_RATIO: Float = 0.1;

/// A visible area in instance coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundingBox {
    /// Min x coordinate.
    pub x_min: Float,
    /// Max x coordinate.
    pub x_max: Float,
    /// Min y coordinate.
    pub y_min: Float,
    /// Max y coordinate.
    pub y_max: Float,
}

impl BoundingBox {
    /// Creates a bounding box around all cities of the instance padded by a tenth of max coordinates.
    pub fn new(instance: &Instance) -> Self {
        let (x_min, x_max, y_min, y_max) = instance.cities().iter().fold(
            (Float::MAX, Float::MIN, Float::MAX, Float::MIN),
            |(x_min, x_max, y_min, y_max), city| {
                (x_min.min(city.x), x_max.max(city.x), y_min.min(city.y), y_max.max(city.y))
            },
        );

        Self {
            x_min: (x_min - PADDING_RATIO * x_max.abs()).floor(),
            x_max: (x_max + PADDING_RATIO * x_max.abs()).ceil(),
            y_min: (y_min - PADDING_RATIO * y_max.abs()).floor(),
            y_max: (y_max + PADDING_RATIO * y_max.abs()).ceil(),
        }
    }

    /// Returns image size in pixels keeping the aspect ratio of the box.
    pub fn get_image_size(&self) -> (u32, u32) {
        let (width, height) = ((self.x_max - self.x_min).max(1.), (self.y_max - self.y_min).max(1.));
        let scale = IMAGE_SIZE / width.max(height);

        ((width * scale).round() as u32, (height * scale).round() as u32)
    }
}

/// Returns stroke width of the leg traveled with the given weight.
pub fn get_stroke_width(weight: Float, capacity: Float) -> Float {
    1. + 4. * weight / capacity
}

/// Returns marker sizes of all cities scaled by the total profit of their items.
pub fn get_city_sizes(instance: &Instance) -> Vec<Float> {
    let profits = instance.profit_per_city();
    let max_profit = profits.iter().copied().fold(0., Float::max);

    profits
        .iter()
        .map(|&profit| {
            let ratio = if max_profit > 0. { profit / max_profit } else { 0. };
            10. + 50. * ratio
        })
        .collect()
}

/// Writes the feasible solution as svg image.
pub fn write_svg<W: Write>(instance: &Instance, solution: &Solution, mut writer: BufWriter<W>) -> GenericResult<()> {
    let travel = match trace_solution(instance, solution) {
        (verdict, Some(travel)) if verdict.is_feasible() => travel,
        _ => return Err("cannot draw infeasible solution".into()),
    };

    let mut svg = String::new();
    draw_travel(instance, &travel, &mut svg).map_err(|err| format!("cannot draw solution: {err}"))?;

    writer.write_all(svg.as_bytes())?;
    writer.flush().map_err(GenericError::from)
}

fn draw_travel(instance: &Instance, travel: &Travel, svg: &mut String) -> DrawResult<()> {
    let bbox = BoundingBox::new(instance);

    let area = SVGBackend::with_string(svg, bbox.get_image_size()).into_drawing_area();
    area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&area).build_cartesian_2d(bbox.x_min..bbox.x_max, bbox.y_min..bbox.y_max)?;

    for leg in travel.legs.iter() {
        if let (Some(from), Some(to)) = (instance.city(leg.from), instance.city(leg.to)) {
            let width = get_stroke_width(leg.weight, instance.meta.capacity).round() as u32;
            chart.draw_series(LineSeries::new(vec![(from.x, from.y), (to.x, to.y)], BLACK.stroke_width(width)))?;
        }
    }

    chart.draw_series(
        instance
            .cities()
            .iter()
            .zip(get_city_sizes(instance))
            .map(|(city, size)| Circle::new((city.x, city.y), size.sqrt() / 2., BLACK.filled())),
    )?;

    if let Some(origin) = instance.city(instance.origin()) {
        chart.draw_series([TriangleMarker::new((origin.x, origin.y), 8, GREEN.filled())])?;
    }

    if let Some(destination) = instance.city(instance.destination()) {
        chart.draw_series([
            EmptyElement::at((destination.x, destination.y)) + Rectangle::new([(-6, -6), (6, 6)], RED.filled())
        ])?;
    }

    area.present()?;

    Ok(())
}
