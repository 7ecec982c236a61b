use trellis_manifest::{DetailAction, DetailView, EntityDefinition};

use super::{ResolvedBase, Resolver, Result};

/// A group of fields on a detail page. Untitled sections render without a
/// heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSection {
    pub title: Option<String>,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ResolvedDetailView<'a> {
    pub base: ResolvedBase,
    pub entity: &'a EntityDefinition,
    pub sections: Vec<ResolvedSection>,
    pub actions: Vec<DetailAction>,
}

impl ResolvedDetailView<'_> {
    /// Every displayed field, in section order.
    pub fn fields(&self) -> Vec<String> {
        self.sections
            .iter()
            .flat_map(|section| section.fields.iter().cloned())
            .collect()
    }

    pub fn has_action(&self, action: DetailAction) -> bool {
        self.actions.contains(&action)
    }
}

pub(super) fn resolve<'a>(
    r: &Resolver<'_, 'a>,
    view: &DetailView,
) -> Result<ResolvedDetailView<'a>> {
    let configured = &r.entity.ui.detail.sections;

    let sections = match &view.fields {
        Some(fields) => vec![ResolvedSection {
            title: None,
            fields: r.fields("fields", fields)?,
        }],
        None if !configured.is_empty() => configured
            .iter()
            .map(|section| {
                Ok(ResolvedSection {
                    title: Some(section.title.clone()),
                    fields: r.fields("sections", &section.fields)?,
                })
            })
            .collect::<Result<Vec<_>>>()?,
        None => vec![ResolvedSection {
            title: None,
            fields: r.fields("fields", &r.entity.display_field_names())?,
        }],
    };

    for behavior in r.entity.behaviors.values() {
        for field in behavior.updates.keys() {
            r.field("behaviors", field)?;
        }
    }

    Ok(ResolvedDetailView {
        base: r.base(format!("{} details", r.entity_name())),
        entity: r.entity,
        sections,
        actions: view
            .actions
            .clone()
            .unwrap_or_else(|| DetailAction::DEFAULTS.to_vec()),
    })
}

#[cfg(test)]
mod tests {
    use trellis_manifest::{
        Behavior, DetailSection, FieldDefinition, FieldType, ViewBase, ViewDefinition,
    };

    use crate::{ResolvedView, ViewConfigError, resolve_view};

    use super::*;

    fn task() -> EntityDefinition {
        EntityDefinition::new("Task")
            .field("id", FieldDefinition::new(FieldType::Uuid).auto())
            .field("title", FieldDefinition::new(FieldType::String))
            .field("status", FieldDefinition::enumeration(["todo", "done"]))
            .field("createdAt", FieldDefinition::new(FieldType::Datetime).auto())
    }

    fn detail(entity: &EntityDefinition, fields: Option<Vec<String>>) -> Result<ResolvedDetailView<'_>> {
        let view = ViewDefinition::Detail(DetailView {
            base: ViewBase {
                entity: Some("Task".into()),
                ..Default::default()
            },
            fields,
            actions: None,
        });
        match resolve_view("TaskDetail", &view, Some(entity))? {
            ResolvedView::Detail(detail) => Ok(detail),
            other => panic!("Expected detail view, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_default_section_excludes_id() {
        let task = task();
        let view = detail(&task, None).unwrap();

        assert_eq!(view.sections.len(), 1);
        assert_eq!(view.sections[0].title, None);
        assert_eq!(view.fields(), vec!["title", "status", "createdAt"]);
        assert_eq!(view.base.route, "/tasks/:id");
        assert_eq!(view.base.title, "Task details");
        assert!(view.has_action(DetailAction::Back));
    }

    #[test]
    fn test_configured_sections() {
        let mut task = task();
        task.ui.detail.sections = vec![
            DetailSection {
                title: "Overview".into(),
                fields: vec!["title".into()],
            },
            DetailSection {
                title: "Tracking".into(),
                fields: vec!["status".into(), "createdAt".into()],
            },
        ];

        let view = detail(&task, None).unwrap();
        assert_eq!(view.sections[1].title.as_deref(), Some("Tracking"));
        assert_eq!(view.fields(), vec!["title", "status", "createdAt"]);

        let view = detail(&task, Some(vec!["status".into()])).unwrap();
        assert_eq!(view.sections.len(), 1);
        assert_eq!(view.fields(), vec!["status"]);
    }

    #[test]
    fn test_behavior_updates_must_name_fields() {
        let mut task = task();
        task.behaviors.insert(
            "archive".into(),
            Behavior {
                updates: [("archived".to_string(), true.into())].into_iter().collect(),
                ..Default::default()
            },
        );

        let err = detail(&task, None).unwrap_err();
        assert!(matches!(
            err,
            ViewConfigError::UnknownField { ref attribute, ref field, .. }
                if attribute == "behaviors" && field == "archived"
        ));
    }
}
