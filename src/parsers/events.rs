//! # 事例文件解析器
//!
//! 读取 `energy_gev,cos_zenith[,depth_m]` 格式的事例 CSV，
//! 写出传播结果。
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `models/event.rs`

use crate::error::{MuRangeError, Result};
use crate::models::{EventRecord, PropagatedEvent};

use std::io::Read;
use std::path::Path;

/// 从文件读取事例
pub fn read_events_file(path: &Path) -> Result<Vec<EventRecord>> {
    let file = std::fs::File::open(path).map_err(|e| MuRangeError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    read_events(file, &path.display().to_string())
}

/// 从任意输入流读取事例
pub fn read_events<R: Read>(reader: R, name: &str) -> Result<Vec<EventRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    reader
        .deserialize::<EventRecord>()
        .enumerate()
        .map(|(i, record)| {
            record.map_err(|e| MuRangeError::ParseError {
                format: "event".to_string(),
                path: name.to_string(),
                reason: format!("row {}: {}", i + 1, e),
            })
        })
        .collect()
}

/// 写出传播结果
pub fn write_propagated_file(events: &[PropagatedEvent], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    // serialize 只在写第一条记录时带出表头
    if events.is_empty() {
        wtr.write_record(PropagatedEvent::HEADER)?;
    }
    for event in events {
        wtr.serialize(event)?;
    }
    wtr.flush().map_err(|e| MuRangeError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_events_with_optional_depth() {
        let content = "energy_gev,cos_zenith,depth_m\n100,0.8,85\n50,1.0,\n";
        let events = read_events(content.as_bytes(), "test").unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].depth_m, Some(85.0));
        assert_eq!(events[1].depth_m, None);
    }

    #[test]
    fn test_read_events_without_depth_column() {
        let content = "energy_gev,cos_zenith\n# comment\n100,0.8\n";
        let events = read_events(content.as_bytes(), "test").unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].cos_zenith, 0.8);
        assert_eq!(events[0].depth_m, None);
    }

    #[test]
    fn test_empty_output_keeps_header() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty_propagated.csv");
        write_propagated_file(&[], &empty).unwrap();
        let text = std::fs::read_to_string(&empty).unwrap();
        assert_eq!(text.trim_end(), PropagatedEvent::HEADER.join(","));

        let one = dir.path().join("one_propagated.csv");
        let event = PropagatedEvent {
            energy_gev: 100.0,
            cos_zenith: 1.0,
            depth_m: 85.0,
            slant_depth_m: 85.0,
            residual_energy_gev: 40.0,
            flux_weight: 1e-6,
            status: crate::models::PropagationStatus::Ok,
        };
        write_propagated_file(&[event], &one).unwrap();
        let text = std::fs::read_to_string(&one).unwrap();
        assert_eq!(text.lines().next(), Some(PropagatedEvent::HEADER.join(",").as_str()));
    }

    #[test]
    fn test_read_events_bad_row() {
        let content = "energy_gev,cos_zenith\nten,0.8\n";
        let err = read_events(content.as_bytes(), "events.csv").unwrap_err();
        assert!(err.to_string().contains("events.csv"));
    }
}
