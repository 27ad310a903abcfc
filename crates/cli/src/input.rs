//! Cross-section readers: a JSON array of lane descriptors, or a CSV table
//! with one lane per row.

use anyhow::{bail, Context, Result};
use laneclass::{LaneDescriptor, LaneDirection, LaneKind, VehicleKinds};
use polars::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read one cross-section, picking the format from the file extension.
pub fn read_lanes(path: &Path) -> Result<Vec<LaneDescriptor>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => read_json(path),
        Some("csv") => read_csv(path),
        _ => bail!(
            "unsupported input {} (expected .json or .csv)",
            path.display()
        ),
    }
}

fn read_json(path: &Path) -> Result<Vec<LaneDescriptor>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

/// Columns: `position,width,vertical_offset,lane_kind,vehicle_kinds,direction,
/// allows_custom_connections`. Only `position`, `width` and `lane_kind` are
/// required; missing columns and empty cells take the descriptor defaults.
fn read_csv(path: &Path) -> Result<Vec<LaneDescriptor>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let position = float_column(&df, "position")?.context("missing column `position`")?;
    let width = float_column(&df, "width")?.context("missing column `width`")?;
    let lane_kind = text_column(&df, "lane_kind")?.context("missing column `lane_kind`")?;
    let vertical_offset = float_column(&df, "vertical_offset")?;
    let vehicle_kinds = text_column(&df, "vehicle_kinds")?;
    let direction = text_column(&df, "direction")?;
    let custom = bool_column(&df, "allows_custom_connections")?;

    let mut lanes = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let kind: LaneKind = parse_enum(lane_kind[row].as_deref(), "lane_kind", row)?
            .with_context(|| format!("row {row}: empty `lane_kind`"))?;
        let mut lane = LaneDescriptor::new(
            kind,
            position[row].unwrap_or(f64::NAN),
            width[row].unwrap_or(0.0),
        );
        if let Some(v) = vertical_offset.as_ref().and_then(|c| c[row]) {
            lane = lane.with_vertical_offset(v);
        }
        if let Some(col) = &vehicle_kinds {
            let kinds: Option<VehicleKinds> =
                parse_enum(col[row].as_deref(), "vehicle_kinds", row)?;
            lane = lane.with_vehicle_kinds(kinds.unwrap_or_default());
        }
        if let Some(col) = &direction {
            let dir: Option<LaneDirection> = parse_enum(col[row].as_deref(), "direction", row)?;
            lane = lane.with_direction(dir.unwrap_or_default());
        }
        if let Some(allows) = custom.as_ref().and_then(|c| c[row]) {
            lane = lane.with_custom_connections(allows);
        }
        lanes.push(lane);
    }
    Ok(lanes)
}

fn float_column(df: &DataFrame, name: &str) -> Result<Option<Vec<Option<f64>>>> {
    let Ok(col) = df.column(name) else {
        return Ok(None);
    };
    let cast = col
        .cast(&DataType::Float64)
        .with_context(|| format!("column `{name}` is not numeric"))?;
    Ok(Some(cast.f64()?.into_iter().collect()))
}

fn text_column(df: &DataFrame, name: &str) -> Result<Option<Vec<Option<String>>>> {
    let Ok(col) = df.column(name) else {
        return Ok(None);
    };
    let cast = col.cast(&DataType::String)?;
    Ok(Some(
        cast.str()?
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect(),
    ))
}

fn bool_column(df: &DataFrame, name: &str) -> Result<Option<Vec<Option<bool>>>> {
    let Ok(col) = df.column(name) else {
        return Ok(None);
    };
    let cast = col
        .cast(&DataType::Boolean)
        .with_context(|| format!("column `{name}` is not boolean"))?;
    Ok(Some(cast.bool()?.into_iter().collect()))
}

/// Parse a cell through the type's serde text form (`snake_case` variants,
/// `CAR | TROLLEYBUS` for vehicle kinds). Blank cells yield `None`.
fn parse_enum<T: DeserializeOwned>(
    cell: Option<&str>,
    column: &str,
    row: usize,
) -> Result<Option<T>> {
    match cell.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => serde_json::from_value(Value::String(text.to_string()))
            .map(Some)
            .with_context(|| format!("row {row}: bad `{column}` value {text:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn json_array_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("street.json");
        fs::write(
            &path,
            r#"[
                {"position": -1.5, "width": 3.0, "lane_kind": "vehicle",
                 "vehicle_kinds": "CAR", "direction": "backward"},
                {"position": 1.5, "width": 3.0, "lane_kind": "vehicle",
                 "vehicle_kinds": "CAR", "direction": "forward",
                 "allows_custom_connections": true},
                {"position": 4.0, "width": 2.0, "lane_kind": "pedestrian"}
            ]"#,
        )
        .unwrap();
        let lanes = read_lanes(&path).unwrap();
        assert_eq!(lanes.len(), 3);
        assert_eq!(lanes[0].direction, LaneDirection::Backward);
        assert!(lanes[1].allows_custom_connections);
        assert_eq!(lanes[2].direction, LaneDirection::None);
        assert_eq!(lanes[2].vehicle_kinds, VehicleKinds::empty());
    }

    #[test]
    fn csv_rows_become_descriptors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("street.csv");
        fs::write(
            &path,
            "position,width,vertical_offset,lane_kind,vehicle_kinds,direction,allows_custom_connections\n\
             -4.0,2.0,0.2,pedestrian,,both,false\n\
             -1.5,3.0,0.0,vehicle,CAR,backward,true\n\
             1.5,3.0,0.0,transport_vehicle,CAR | TROLLEYBUS,forward,false\n",
        )
        .unwrap();
        let lanes = read_lanes(&path).unwrap();
        assert_eq!(lanes.len(), 3);
        assert_eq!(lanes[0].lane_kind, LaneKind::Pedestrian);
        assert_eq!(lanes[0].vertical_offset, 0.2);
        assert_eq!(lanes[1].direction, LaneDirection::Backward);
        assert!(lanes[1].allows_custom_connections);
        assert_eq!(
            lanes[2].vehicle_kinds,
            VehicleKinds::CAR | VehicleKinds::TROLLEYBUS
        );
        assert!(lanes[2].is_road_lane());
    }

    #[test]
    fn csv_with_only_required_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("min.csv");
        fs::write(&path, "position,width,lane_kind\n0.0,1.0,other\n").unwrap();
        let lanes = read_lanes(&path).unwrap();
        assert_eq!(lanes, vec![LaneDescriptor::new(LaneKind::Other, 0.0, 1.0)]);
    }

    #[test]
    fn bad_enum_reports_row_and_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "position,width,lane_kind\n0.0,1.0,hovercraft\n").unwrap();
        let err = format!("{:#}", read_lanes(&path).unwrap_err());
        assert!(err.contains("row 0"), "{err}");
        assert!(err.contains("lane_kind"), "{err}");
    }

    #[test]
    fn unknown_extension_is_rejected() {
        assert!(read_lanes(Path::new("lanes.txt")).is_err());
    }
}
