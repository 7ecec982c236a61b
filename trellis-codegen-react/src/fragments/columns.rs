//! List view blocks: table column descriptors, filter bar and search box.

use serde::Serialize;
use trellis_codegen::{field_label, resolve::ResolvedListView};
use trellis_manifest::{EntityDefinition, FieldType};

use super::RECORD;
use crate::ast::{JsArray, JsObject, JsxElement, js_string};

/// A data table column as the runtime's `DataTable` expects it.
#[derive(Debug, Serialize)]
struct ColumnDescriptor {
    key: String,
    label: String,
    #[serde(rename = "type")]
    field_type: &'static str,
    sortable: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    options: Vec<String>,
}

/// Type of a column; undeclared bookkeeping timestamps are datetimes.
fn column_type(entity: &EntityDefinition, column: &str) -> &'static str {
    match entity.get_field(column) {
        Some(field) => field.field_type.as_str(),
        None if column.ends_with("At") || column.ends_with("_at") => FieldType::Datetime.as_str(),
        None => FieldType::String.as_str(),
    }
}

/// JSON array of column descriptors, in column order.
pub fn columns_config(columns: &[String], entity: &EntityDefinition) -> serde_json::Result<String> {
    let descriptors: Vec<ColumnDescriptor> = columns
        .iter()
        .map(|column| ColumnDescriptor {
            key: column.clone(),
            label: field_label(entity, column),
            field_type: column_type(entity, column),
            sortable: true,
            options: entity
                .get_field(column)
                .map(|field| field.options.clone())
                .unwrap_or_default(),
        })
        .collect();
    serde_json::to_string_pretty(&descriptors)
}

/// The filter bar, or nothing when the view has no filters.
pub fn filter_bar(view: &ResolvedListView<'_>) -> String {
    if view.filters.is_empty() {
        return String::new();
    }

    let fields = view.filters.iter().fold(JsArray::new(), |arr, name| {
        let options = view
            .entity
            .get_field(name)
            .filter(|field| field.is_enum())
            .map(|field| JsArray::from_strings(&field.options));
        let descriptor = JsObject::new()
            .string("field", name)
            .string("label", field_label(view.entity, name));
        arr.object(match options {
            Some(options) => descriptor.array("options", options),
            None => descriptor,
        })
    });

    JsxElement::new("FilterBar")
        .expr("fields", fields.build_multiline())
        .expr("values", "filters")
        .expr("onChange", "setFilters")
        .build()
}

/// The search box, or nothing when the entity declares no searchable fields.
pub fn search_box(view: &ResolvedListView<'_>) -> String {
    if view.searchable.is_empty() {
        return String::new();
    }

    let labels: Vec<String> = view
        .searchable
        .iter()
        .map(|field| field_label(view.entity, field).to_lowercase())
        .collect();
    JsxElement::new("SearchBox")
        .expr("value", "query")
        .expr("onChange", "setQuery")
        .attr("placeholder", format!("Search by {}", labels.join(", ")))
        .build()
}

/// Boolean expression matching a row against the search query.
pub fn search_match(view: &ResolvedListView<'_>) -> String {
    if view.searchable.is_empty() {
        return "true".to_string();
    }

    format!(
        "{}.some((field) => String({}[field] ?? \"\").toLowerCase().includes(query.toLowerCase()))",
        JsArray::from_strings(&view.searchable).build(),
        RECORD
    )
}

/// Initial sort field as a string literal.
pub fn sort_field(view: &ResolvedListView<'_>) -> String {
    js_string(&view.sort_field)
}

#[cfg(test)]
mod tests {
    use trellis_codegen::{ResolvedView, resolve_view, testing::task_entity};
    use trellis_manifest::{ListView, ViewDefinition};

    use super::*;

    fn list(entity: &EntityDefinition, view: ListView) -> ResolvedListView<'_> {
        match resolve_view("TaskList", &ViewDefinition::List(view), Some(entity)) {
            Ok(ResolvedView::List(list)) => list,
            other => panic!("Expected list view, got {:?}", other),
        }
    }

    #[test]
    fn test_columns_config() {
        let entity = task_entity();
        let columns = vec!["title".to_string(), "status".to_string()];

        insta::assert_snapshot!(columns_config(&columns, &entity).unwrap(), @r#"
        [
          {
            "key": "title",
            "label": "Title",
            "type": "string",
            "sortable": true
          },
          {
            "key": "status",
            "label": "Status",
            "type": "enum",
            "sortable": true,
            "options": [
              "todo",
              "in-progress",
              "done"
            ]
          }
        ]
        "#);
    }

    #[test]
    fn test_undeclared_timestamp_column() {
        let entity = task_entity();
        let out = columns_config(&["createdAt".to_string()], &entity).unwrap();
        assert!(out.contains("\"type\": \"datetime\""));
    }

    #[test]
    fn test_filter_bar_only_with_filters() {
        let entity = task_entity();
        assert_eq!(filter_bar(&list(&entity, ListView::default())), "");

        let view = list(
            &entity,
            ListView {
                filters: Some(vec!["status".into(), "title".into()]),
                ..Default::default()
            },
        );
        assert_eq!(
            filter_bar(&view),
            "<FilterBar\n  fields={[\n    { field: \"status\", label: \"Status\", options: [\"todo\", \"in-progress\", \"done\"] },\n    { field: \"title\", label: \"Title\" },\n  ]}\n  values={filters}\n  onChange={setFilters}\n/>"
        );
    }

    #[test]
    fn test_search() {
        let mut entity = task_entity();
        assert_eq!(search_box(&list(&entity, ListView::default())), "");
        assert_eq!(search_match(&list(&entity, ListView::default())), "true");

        entity.ui.list.searchable = vec!["title".into()];
        let view = list(&entity, ListView::default());
        assert_eq!(
            search_box(&view),
            "<SearchBox value={query} onChange={setQuery} placeholder=\"Search by title\" />"
        );
        assert_eq!(
            search_match(&view),
            "[\"title\"].some((field) => String(record[field] ?? \"\").toLowerCase().includes(query.toLowerCase()))"
        );
        assert_eq!(sort_field(&view), "\"title\"");
    }
}
