//! Console tables for simulation results.

use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::request::SimulationResponse;

pub fn tabulate_distribution(response: &SimulationResponse) -> Table {
    let statistics = &response.statistics;
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Centred)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Outcome".into(), "Count".into(), "Share".into()],
        ));
    for (outcome, &count) in statistics.counts.iter() {
        let mut styles = Styles::default();
        if outcome == response.result {
            styles = styles.with(Header(true));
        }
        table.push_row(Row::new(
            styles,
            vec![
                format!("{outcome}").into(),
                format!("{count}").into(),
                format!("{:.4}", statistics.distribution[outcome]).into(),
            ],
        ));
    }
    table.push_row(Row::new(
        Styles::default().with(Separator(true)),
        vec![
            "Total".into(),
            format!("{}", statistics.total_simulations).into(),
            format!("{:.4}", statistics.distribution.values().iter().sum::<f64>()).into(),
        ],
    ));
    table
}

pub fn tabulate_rates(response: &SimulationResponse) -> Table {
    let statistics = &response.statistics;
    Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(14)).with(HAlign::Left)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
        ])
        .with_row(Row::from(["Average bases".to_string(), format!("{:.3}", statistics.average_bases)]))
        .with_row(Row::from(["Hit rate".to_string(), format!("{:.3}", statistics.hit_rate)]))
        .with_row(Row::from(["On-base rate".to_string(), format!("{:.3}", statistics.on_base_rate)]))
        .with_row(Row::from([
            "Modal outcome".to_string(),
            format!("{} ({} bases)", response.result, response.bases),
        ]))
}
