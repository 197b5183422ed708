use crate::labels::{LabelBounds, PixelPoint};
use crate::projection::Viewport;
use crate::scene::MapScene;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LabelDump {
    pub year: i32,
    pub viewport: Viewport,
    pub labels: Vec<LabelEntryDump>,
    pub skipped: Vec<SkippedDump>,
}

#[derive(Debug, Serialize)]
pub struct LabelEntryDump {
    pub index: usize,
    pub name: String,
    pub anchor: [f64; 2],
    /// `None` when every candidate was rejected and the centroid was used.
    pub candidate: Option<usize>,
    pub pixel: PixelPoint,
    pub bounds: LabelBounds,
}

#[derive(Debug, Serialize)]
pub struct SkippedDump {
    pub index: usize,
    pub name: String,
    pub reason: String,
}

impl LabelDump {
    pub fn from_scene(scene: &MapScene) -> Self {
        let labels = scene
            .pass
            .labels
            .iter()
            .zip(&scene.labels)
            .map(|(label, drawn)| LabelEntryDump {
                index: label.index,
                name: label.name.clone(),
                anchor: label.placement.anchor.into(),
                candidate: label.placement.candidate_index(),
                pixel: drawn.position,
                bounds: label.bounds,
            })
            .collect();

        let skipped = scene
            .pass
            .skipped
            .iter()
            .map(|skip| SkippedDump {
                index: skip.index,
                name: skip.name.clone(),
                reason: skip.reason.clone(),
            })
            .collect();

        LabelDump {
            year: scene.year,
            viewport: scene.viewport,
            labels,
            skipped,
        }
    }
}

pub fn label_dump_json(scene: &MapScene) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&LabelDump::from_scene(scene))?)
}

pub fn write_label_dump(path: &Path, scene: &MapScene) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LabelDump::from_scene(scene);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
