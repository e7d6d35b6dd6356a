use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use prism_api::types::{CategoryKeyStatus, CategoryValueStatus, Task};
use serde::Serialize;
use serde_json::Value;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
    Markdown,
}

/// One row per v3 entity. Every intent-shaped kind shares these columns.
#[derive(Tabled, Serialize)]
struct EntityRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "UUID")]
    #[serde(rename = "UUID")]
    uuid: String,
    #[tabled(rename = "Kind")]
    #[serde(rename = "Kind")]
    kind: String,
    #[tabled(rename = "State")]
    #[serde(rename = "State")]
    state: String,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created: String,
}

#[derive(Tabled, Serialize)]
struct TaskRow {
    #[tabled(rename = "UUID")]
    #[serde(rename = "UUID")]
    uuid: String,
    #[tabled(rename = "Operation")]
    #[serde(rename = "Operation")]
    operation: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Progress")]
    #[serde(rename = "Progress")]
    progress: String,
}

#[derive(Tabled, Serialize)]
struct CategoryKeyRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
    #[tabled(rename = "System")]
    #[serde(rename = "System")]
    system_defined: bool,
}

#[derive(Tabled, Serialize)]
struct CategoryValueRow {
    #[tabled(rename = "Key")]
    #[serde(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
}

// -- Row builders --

/// Builds rows from the serialized form of any intent-shaped entity, so one
/// builder covers VMs, clusters, subnets and the rest.
fn build_entity_rows<T: Serialize>(entities: &[T]) -> Result<Vec<EntityRow>> {
    entities
        .iter()
        .map(|entity| {
            let value = serde_json::to_value(entity)?;
            let metadata = &value["metadata"];
            let name = metadata["name"]
                .as_str()
                .or_else(|| value["spec"]["name"].as_str())
                .or_else(|| value["status"]["name"].as_str())
                .unwrap_or_default();
            Ok(EntityRow {
                name: name.to_string(),
                uuid: text(&metadata["uuid"]),
                kind: text(&metadata["kind"]),
                state: text(&value["status"]["state"]),
                created: metadata["creation_time"]
                    .as_str()
                    .and_then(|t| t.parse::<DateTime<Utc>>().ok())
                    .map(format_time)
                    .unwrap_or_default(),
            })
        })
        .collect()
}

fn build_task_rows(tasks: &[Task]) -> Vec<TaskRow> {
    tasks
        .iter()
        .map(|t| TaskRow {
            uuid: t.uuid.clone().unwrap_or_default(),
            operation: t.operation_type.clone().unwrap_or_default(),
            status: t.status.clone().unwrap_or_default(),
            progress: t
                .percentage_complete
                .map(|p| format!("{}%", p))
                .unwrap_or_default(),
        })
        .collect()
}

fn build_category_key_rows(keys: &[CategoryKeyStatus]) -> Vec<CategoryKeyRow> {
    keys.iter()
        .map(|k| CategoryKeyRow {
            name: k.name.clone(),
            description: k.description.clone().unwrap_or_default(),
            system_defined: k.system_defined.unwrap_or(false),
        })
        .collect()
}

fn build_category_value_rows(values: &[CategoryValueStatus]) -> Vec<CategoryValueRow> {
    values
        .iter()
        .map(|v| CategoryValueRow {
            key: v.name.clone(),
            value: v.value.clone(),
            description: v.description.clone().unwrap_or_default(),
        })
        .collect()
}

// -- Printers --

pub fn print_entities<T: Serialize>(entities: &[T], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&entities),
        _ => print_rows(&build_entity_rows(entities)?, format)?,
    }
    Ok(())
}

pub fn print_tasks(tasks: &[Task], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&tasks),
        _ => print_rows(&build_task_rows(tasks), format)?,
    }
    Ok(())
}

pub fn print_category_keys(keys: &[CategoryKeyStatus], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&keys),
        _ => print_rows(&build_category_key_rows(keys), format)?,
    }
    Ok(())
}

pub fn print_category_values(values: &[CategoryValueStatus], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&values),
        _ => print_rows(&build_category_value_rows(values), format)?,
    }
    Ok(())
}

fn print_rows<R: Tabled + Serialize>(rows: &[R], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        _ => println!("{}", Table::new(rows)),
    }
    Ok(())
}

pub fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn text(value: &Value) -> String {
    value.as_str().unwrap_or_default().to_string()
}

fn format_time(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_api::types::{TaskList, Vm};

    fn load_vm_fixture() -> Vm {
        let json_str = include_str!("../../prism_api/tests/fixtures/vm.json");
        serde_json::from_str(json_str).unwrap()
    }

    fn load_tasks_fixture() -> Vec<Task> {
        let json_str = include_str!("../../prism_api/tests/fixtures/task_list.json");
        let list: TaskList = serde_json::from_str(json_str).unwrap();
        list.entities
    }

    fn csv_from_rows<T: Serialize>(rows: &[T]) -> String {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in rows {
            wtr.serialize(row).unwrap();
        }
        wtr.flush().unwrap();
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_build_entity_rows_mapping() {
        let rows = build_entity_rows(&[load_vm_fixture()]).unwrap();
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row.name, "test-vm");
        assert_eq!(row.uuid, "abc-123");
        assert_eq!(row.kind, "vm");
        assert_eq!(row.state, "COMPLETE");
        assert_eq!(row.created, "2024-01-15 10:30");
    }

    #[test]
    fn test_build_entity_rows_name_falls_back_to_spec() {
        let vm: Vm = serde_json::from_value(serde_json::json!({
            "metadata": { "kind": "vm" },
            "spec": { "name": "pending-vm" }
        }))
        .unwrap();
        let rows = build_entity_rows(&[vm]).unwrap();
        assert_eq!(rows[0].name, "pending-vm");
        assert_eq!(rows[0].uuid, "");
        assert_eq!(rows[0].state, "");
        assert_eq!(rows[0].created, "");
    }

    #[test]
    fn test_build_entity_rows_empty() {
        let rows = build_entity_rows::<Vm>(&[]).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_build_task_rows_mapping() {
        let rows = build_task_rows(&load_tasks_fixture());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].operation, "VmCreate");
        assert_eq!(rows[0].progress, "100%");
        assert_eq!(rows[1].status, "RUNNING");
    }

    #[test]
    fn test_build_category_value_rows_missing_description() {
        let values: Vec<CategoryValueStatus> = serde_json::from_value(serde_json::json!([
            { "name": "Environment", "value": "Dev" }
        ]))
        .unwrap();
        let rows = build_category_value_rows(&values);
        assert_eq!(rows[0].key, "Environment");
        assert_eq!(rows[0].description, "");
    }

    #[test]
    fn test_csv_entity_headers() {
        let rows = build_entity_rows(&[load_vm_fixture()]).unwrap();
        let csv = csv_from_rows(&rows);
        let header = csv.lines().next().unwrap();
        assert_eq!(header, "Name,UUID,Kind,State,Created");
    }

    #[test]
    fn test_csv_task_headers() {
        let rows = build_task_rows(&load_tasks_fixture());
        let csv = csv_from_rows(&rows);
        assert_eq!(csv.lines().next().unwrap(), "UUID,Operation,Status,Progress");
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn test_markdown_table_style() {
        let rows = build_task_rows(&load_tasks_fixture());
        let mut table = Table::new(&rows);
        table.with(Style::markdown());
        let rendered = table.to_string();
        assert!(rendered.starts_with("| UUID"));
        assert!(rendered.contains("| t-1"));
    }
}
