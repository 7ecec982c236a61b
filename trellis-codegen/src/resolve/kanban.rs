use serde::Serialize;
use trellis_core::humanize_option;
use trellis_manifest::{EntityDefinition, FieldType, KanbanView, ViewKind};

use super::{ResolvedBase, Resolver, Result};
use crate::ViewConfigError;

const DEFAULT_MAX_CARD_FIELDS: usize = 3;

/// One board column; `id` is the enum option a card in it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedKanbanColumn {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct ResolvedKanbanView<'a> {
    pub base: ResolvedBase,
    pub entity: &'a EntityDefinition,
    /// Enum field a drop commits
    pub group_by: String,
    pub columns: Vec<ResolvedKanbanColumn>,
    /// Field promoted to the card heading
    pub title_field: Option<String>,
    /// Secondary card fields, already capped
    pub card_fields: Vec<String>,
}

pub(super) fn resolve<'a>(
    r: &Resolver<'_, 'a>,
    view: &KanbanView,
) -> Result<ResolvedKanbanView<'a>> {
    let group_by = match &view.group_by {
        Some(group_by) => group_by.clone(),
        None => default_group_by(r.entity).ok_or_else(|| ViewConfigError::MissingAttribute {
            view: r.view_name.to_string(),
            kind: ViewKind::Kanban,
            attribute: "groupBy".to_string(),
        })?,
    };

    let field = r.field("groupBy", &group_by)?;
    if field.field_type != FieldType::Enum {
        return Err(ViewConfigError::GroupByNotEnum {
            view: r.view_name.to_string(),
            field: group_by,
            found: field.field_type,
        });
    }

    let columns = match &view.columns {
        Some(columns) => columns
            .iter()
            .map(|column| ResolvedKanbanColumn {
                id: column.id.clone(),
                title: column
                    .title
                    .clone()
                    .unwrap_or_else(|| humanize_option(&column.id)),
            })
            .collect(),
        None => {
            r.require_options(&group_by)?;
            field
                .options
                .iter()
                .map(|option| ResolvedKanbanColumn {
                    id: option.clone(),
                    title: humanize_option(option),
                })
                .collect()
        }
    };

    let title_field = r.entity.title_field().map(str::to_string);
    let max = view.max_card_fields.unwrap_or(DEFAULT_MAX_CARD_FIELDS);
    let card_fields = match &view.card_fields {
        Some(fields) => r.fields("cardFields", fields)?,
        None => r
            .entity
            .editable_field_names()
            .into_iter()
            .filter(|name| Some(name) != title_field.as_ref() && *name != group_by)
            .collect(),
    };
    for name in &card_fields {
        r.require_options(name)?;
    }

    Ok(ResolvedKanbanView {
        base: r.base(format!("{} board", r.entity_name())),
        entity: r.entity,
        group_by,
        columns,
        title_field,
        card_fields: card_fields.into_iter().take(max).collect(),
    })
}

/// A `status` enum field, else the first enum field.
fn default_group_by(entity: &EntityDefinition) -> Option<String> {
    match entity.get_field("status") {
        Some(status) if status.is_enum() => Some("status".to_string()),
        _ => entity.enum_fields().next().map(|(name, _)| name.clone()),
    }
}
