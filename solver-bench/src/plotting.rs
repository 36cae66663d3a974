use itertools::Itertools;
use std::{collections::BTreeMap, error::Error, path::Path, time::Duration};

use plotters::prelude::*;

/// Draws a cactus plot: for every solver, the number of solved instances
/// against the time each one took, fastest first.
pub fn plot_runtimes(
    measurement: &BTreeMap<String, Vec<Duration>>,
    path: impl AsRef<Path>,
    size: (u32, u32),
) -> Result<(), Box<dyn Error>> {
    let drawing_area = SVGBackend::new(path.as_ref(), size).into_drawing_area();
    drawing_area.fill(&WHITE)?;

    let max_instances = measurement
        .values()
        .map(|vec| vec.len())
        .max()
        .unwrap_or(0)
        .max(1);

    let max_duration = measurement
        .values()
        .filter_map(|vec| vec.iter().max())
        .max()
        .map_or(0, Duration::as_millis)
        .max(1);

    let mut chart = ChartBuilder::on(&drawing_area)
        .x_label_area_size(30)
        .y_label_area_size(80)
        .margin(20)
        .build_cartesian_2d(0..max_instances, 0..max_duration)?;

    chart
        .configure_mesh()
        .x_desc("Number of solved instances")
        .y_desc("CPU-Time [ms]")
        .draw()?;

    for (index, (name, times)) in measurement.iter().enumerate() {
        let color = Palette99::pick(index).to_rgba();

        let y = times
            .iter()
            .map(|dur| dur.as_millis())
            .sorted()
            .collect::<Vec<_>>();

        let points = PointSeries::of_element(
            y.iter().cloned().enumerate(),
            5,
            &color,
            &|c, s, st| Circle::new(c, s, st),
        );
        chart.draw_series(points)?;

        let lines = LineSeries::new(y.into_iter().enumerate(), &color);
        chart
            .draw_series(lines)?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x - 20, y)], &color));
    }
    chart.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .margin(5)
        .draw()?;
    Ok(())
}
