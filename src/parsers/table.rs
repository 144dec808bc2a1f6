//! # 阻止本领表解析器
//!
//! 解析两列 CSV：`kinetic_energy_mev,csda_range_gcm2`。
//! 以 `#` 开头的行视为注释。
//!
//! ## 依赖关系
//! - 被 `physics/model.rs` 和 `commands/` 调用
//! - 使用 `models/table.rs` 的 StoppingPowerTable
//! - 使用 `csv` + `serde` 反序列化

use crate::error::{MuRangeError, Result};
use crate::models::{StoppingPowerTable, TableRow};

use std::fs;
use std::io::Write;
use std::path::Path;

/// 随程序分发的标准岩石数据表
const STANDARD_ROCK_CSV: &str = include_str!("../../data/standard_rock.csv");

/// 加载内置标准岩石数据表
pub fn builtin_table() -> Result<StoppingPowerTable> {
    parse_table_content(STANDARD_ROCK_CSV, "standard_rock.csv")
}

/// 从文件加载数据表
pub fn parse_table_file(path: &Path) -> Result<StoppingPowerTable> {
    if !path.exists() {
        return Err(MuRangeError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| MuRangeError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let table = parse_table_content(&content, &path.display().to_string())?;
    log::info!("loaded {} table rows from {}", table.len(), path.display());
    Ok(table)
}

/// 从文本内容解析数据表
pub fn parse_table_content(content: &str, name: &str) -> Result<StoppingPowerTable> {
    let mut reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for (i, record) in reader.deserialize::<TableRow>().enumerate() {
        let row = record.map_err(|e| MuRangeError::ParseError {
            format: "stopping-power table".to_string(),
            path: name.to_string(),
            reason: format!("row {}: {}", i + 1, e),
        })?;
        rows.push(row);
    }

    StoppingPowerTable::from_rows(&rows)
}

/// 写入带注释头的 CSV（便于追溯来源）
pub fn write_table_with_comment(
    table: &StoppingPowerTable,
    comment: &str,
    path: &Path,
) -> Result<()> {
    let mut file = fs::File::create(path).map_err(|e| MuRangeError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;
    for line in comment.lines() {
        writeln!(file, "# {}", line).map_err(|e| MuRangeError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;
    }

    let mut wtr = csv::Writer::from_writer(file);
    for row in table.rows() {
        wtr.serialize(row)?;
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
    fn test_builtin_table() {
        let table = builtin_table().unwrap();
        assert_eq!(table.len(), 37);
        assert_eq!(table.energy_domain_mev(), (10.0, 1e7));
        assert!(table.ranges_gcm2().windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_parse_with_comments_and_spaces() {
        let content = r#"
# custom rock
kinetic_energy_mev, csda_range_gcm2
10, 0.85
100, 37.0
# trailing comment
1000, 554.0
"#;
        let table = parse_table_content(content, "test").unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.ranges_gcm2()[1], 37.0);
    }

    #[test]
    fn test_parse_bad_number() {
        let content = "kinetic_energy_mev,csda_range_gcm2\n10,abc\n";
        let err = parse_table_content(content, "bad.csv").unwrap_err();
        assert!(matches!(err, MuRangeError::ParseError { .. }));
        assert!(err.to_string().contains("bad.csv"));
    }

    #[test]
    fn test_parse_unsorted_table() {
        let content = "kinetic_energy_mev,csda_range_gcm2\n100,37\n10,0.85\n";
        assert!(matches!(
            parse_table_content(content, "unsorted"),
            Err(MuRangeError::MalformedTable(_))
        ));
    }
}
