//! Screen a small sample batch and print both report artifacts
//!
//! Run with: cargo run --example run_batch

use anyhow::Result;
use permit_engine::PermitEngine;
use report_engine::{to_csv, to_typst_source, ReportTable};
use shared_types::{CadEntity, InputDocument, Point};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let engine = PermitEngine::default();

    let documents = vec![
        InputDocument::text(
            "omuta_plan.pdf",
            "盛土計画概要\n所在地：大牟田市中央\n造成面積 600㎡\n盛土高さ：1.0m\n",
        ),
        InputDocument::text(
            "kumamoto_plan.pdf",
            "地名：熊本市東区\n造成面積 120㎡\n盛土高さ：0.8m\n",
        ),
        InputDocument::cad(
            "fukuoka_site.dxf",
            vec![
                CadEntity::Text {
                    content: "所在地：福岡市早良区".to_string(),
                },
                CadEntity::MText {
                    content: "盛土高さ：1.0m".to_string(),
                },
                CadEntity::Hatch { area: Some(250.0) },
                CadEntity::LwPolyline {
                    points: vec![
                        Point::new(0.0, 0.0),
                        Point::new(15.0, 0.0),
                        Point::new(15.0, 10.0),
                        Point::new(0.0, 10.0),
                    ],
                    closed: true,
                },
            ],
        ),
        InputDocument::text("unreadable.pdf", "（スキャン画像のみ、テキストなし）"),
    ];

    let results = engine.evaluate_batch(&documents);
    let table = ReportTable::assemble(&results);

    println!("--- spreadsheet (CSV) ---");
    println!("{}", to_csv(&table));

    println!("--- paginated report (Typst source) ---");
    println!("{}", to_typst_source(&table)?);

    Ok(())
}
