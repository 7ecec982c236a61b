//! Resolution of view definitions into fully populated configurations.
//!
//! [`resolve_view`] applies every default and validates every field reference
//! of a view in one step. Backends render only from the resolved structs, so
//! a view that resolves can always be generated.

mod calendar;
mod dashboard;
mod detail;
mod form;
mod kanban;
mod list;
mod routes;

use trellis_core::{capitalize, humanize_option, to_pascal_case};
use trellis_manifest::{
    CustomView, EntityDefinition, FieldDefinition, FieldType, SYSTEM_FIELD_NAMES, ViewDefinition,
    ViewKind,
};

pub use calendar::ResolvedCalendarView;
pub use dashboard::{ResolvedDashboardView, ResolvedMetric, ResolvedWidget, metric_style};
pub use detail::{ResolvedDetailView, ResolvedSection};
pub use form::ResolvedFormView;
pub use kanban::{ResolvedKanbanColumn, ResolvedKanbanView};
pub use list::ResolvedListView;
pub use routes::{EntityRoutes, ID_SEGMENT, form_mode, view_route};

use crate::ViewConfigError;

type Result<T> = std::result::Result<T, ViewConfigError>;

/// Identity shared by every resolved view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBase {
    /// View name as declared
    pub name: String,
    /// Component identifier (PascalCase view name)
    pub component: String,
    pub route: String,
    pub title: String,
    /// CRUD routes of the bound entity
    pub routes: EntityRoutes,
}

impl ResolvedBase {
    fn new(name: &str, view: &ViewDefinition, default_title: String) -> Self {
        let routes = match view.entity() {
            Some(entity) => EntityRoutes::for_entity(entity),
            None => EntityRoutes::under(&view_route(name, view)),
        };
        Self {
            name: name.to_string(),
            component: to_pascal_case(name),
            route: view_route(name, view),
            title: view.base().title.clone().unwrap_or(default_title),
            routes,
        }
    }
}

/// A custom view rendered from a named template.
#[derive(Debug, Clone)]
pub struct ResolvedCustomView<'a> {
    pub base: ResolvedBase,
    pub entity: Option<&'a EntityDefinition>,
    pub template: String,
}

/// A view with every default applied.
#[derive(Debug, Clone)]
pub enum ResolvedView<'a> {
    List(ResolvedListView<'a>),
    Detail(ResolvedDetailView<'a>),
    Form(ResolvedFormView<'a>),
    Kanban(ResolvedKanbanView<'a>),
    Calendar(ResolvedCalendarView<'a>),
    Dashboard(ResolvedDashboardView<'a>),
    Custom(ResolvedCustomView<'a>),
}

impl<'a> ResolvedView<'a> {
    /// The bound entity; only custom views may have none.
    pub fn entity(&self) -> Option<&'a EntityDefinition> {
        match self {
            ResolvedView::List(v) => Some(v.entity),
            ResolvedView::Detail(v) => Some(v.entity),
            ResolvedView::Form(v) => Some(v.entity),
            ResolvedView::Kanban(v) => Some(v.entity),
            ResolvedView::Calendar(v) => Some(v.entity),
            ResolvedView::Dashboard(v) => Some(v.entity),
            ResolvedView::Custom(v) => v.entity,
        }
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            ResolvedView::List(_) => ViewKind::List,
            ResolvedView::Detail(_) => ViewKind::Detail,
            ResolvedView::Form(_) => ViewKind::Form,
            ResolvedView::Kanban(_) => ViewKind::Kanban,
            ResolvedView::Calendar(_) => ViewKind::Calendar,
            ResolvedView::Dashboard(_) => ViewKind::Dashboard,
            ResolvedView::Custom(_) => ViewKind::Custom,
        }
    }

    pub fn base(&self) -> &ResolvedBase {
        match self {
            ResolvedView::List(v) => &v.base,
            ResolvedView::Detail(v) => &v.base,
            ResolvedView::Form(v) => &v.base,
            ResolvedView::Kanban(v) => &v.base,
            ResolvedView::Calendar(v) => &v.base,
            ResolvedView::Dashboard(v) => &v.base,
            ResolvedView::Custom(v) => &v.base,
        }
    }

    /// Every field the generated view uses, paired with the attribute that
    /// brought it in.
    pub fn field_usages(&self) -> Vec<(&'static str, String)> {
        fn tag(attribute: &'static str, fields: &[String]) -> Vec<(&'static str, String)> {
            fields.iter().map(|f| (attribute, f.clone())).collect()
        }

        match self {
            ResolvedView::List(v) => {
                let mut usages = tag("columns", &v.columns);
                usages.extend(tag("filters", &v.filters));
                usages
            }
            ResolvedView::Detail(v) => tag("fields", &v.fields()),
            ResolvedView::Form(v) => tag("fields", &v.fields),
            ResolvedView::Kanban(v) => {
                let mut usages = vec![("groupBy", v.group_by.clone())];
                usages.extend(v.title_field.iter().map(|f| ("title", f.clone())));
                usages.extend(tag("cardFields", &v.card_fields));
                usages
            }
            ResolvedView::Calendar(v) => vec![
                ("dateField", v.date_field.clone()),
                ("titleField", v.title_field.clone()),
            ],
            ResolvedView::Dashboard(v) => {
                let mut usages: Vec<_> = v
                    .metrics
                    .iter()
                    .filter_map(|m| m.filter.as_ref().map(|(field, _)| ("metrics", field.clone())))
                    .collect();
                usages.extend(v.widgets.iter().filter_map(|w| match w {
                    ResolvedWidget::Chart { field, .. } => Some(("widgets", field.clone())),
                    ResolvedWidget::Recent { .. } => None,
                }));
                usages.dedup();
                usages
            }
            ResolvedView::Custom(_) => Vec::new(),
        }
    }
}

/// Resolve defaults and validate a view against its entity.
///
/// This is the only point at which generation of a view may fail.
pub fn resolve_view<'a>(
    name: &str,
    view: &ViewDefinition,
    entity: Option<&'a EntityDefinition>,
) -> Result<ResolvedView<'a>> {
    if let ViewDefinition::Custom(custom) = view {
        return Ok(ResolvedView::Custom(resolve_custom(name, view, custom, entity)));
    }

    let entity = match (entity, view.entity()) {
        (Some(entity), _) => entity,
        (None, Some(entity_name)) => {
            return Err(ViewConfigError::UnknownEntity {
                view: name.to_string(),
                entity: entity_name.to_string(),
            });
        }
        (None, None) => {
            return Err(ViewConfigError::MissingAttribute {
                view: name.to_string(),
                kind: view.kind(),
                attribute: "entity".to_string(),
            });
        }
    };

    let resolver = Resolver::new(name, view, entity);
    Ok(match view {
        ViewDefinition::List(v) => ResolvedView::List(list::resolve(&resolver, v)?),
        ViewDefinition::Detail(v) => ResolvedView::Detail(detail::resolve(&resolver, v)?),
        ViewDefinition::Form(v) => ResolvedView::Form(form::resolve(&resolver, v)?),
        ViewDefinition::Kanban(v) => ResolvedView::Kanban(kanban::resolve(&resolver, v)?),
        ViewDefinition::Calendar(v) => ResolvedView::Calendar(calendar::resolve(&resolver, v)?),
        ViewDefinition::Dashboard(v) => {
            ResolvedView::Dashboard(dashboard::resolve(&resolver, v)?)
        }
        ViewDefinition::Custom(v) => ResolvedView::Custom(resolve_custom(name, view, v, Some(entity))),
    })
}

fn resolve_custom<'a>(
    name: &str,
    view: &ViewDefinition,
    custom: &CustomView,
    entity: Option<&'a EntityDefinition>,
) -> ResolvedCustomView<'a> {
    ResolvedCustomView {
        base: ResolvedBase::new(name, view, capitalize(name)),
        entity,
        template: custom.template.clone().unwrap_or_else(|| name.to_string()),
    }
}

/// Display label of a field: its `label`, else the capitalized name.
pub fn field_label(entity: &EntityDefinition, name: &str) -> String {
    entity
        .get_field(name)
        .and_then(|field| field.label.clone())
        .unwrap_or_else(|| capitalize(name))
}

/// Display label of an enum option (e.g. "in-progress" -> "In progress").
pub fn option_label(option: &str) -> String {
    humanize_option(option)
}

/// Field lookups and checks shared by the per-kind resolvers.
pub(crate) struct Resolver<'v, 'a> {
    pub view_name: &'v str,
    pub view: &'v ViewDefinition,
    pub entity: &'a EntityDefinition,
}

impl<'v, 'a> Resolver<'v, 'a> {
    fn new(view_name: &'v str, view: &'v ViewDefinition, entity: &'a EntityDefinition) -> Self {
        Self {
            view_name,
            view,
            entity,
        }
    }

    pub fn base(&self, default_title: String) -> ResolvedBase {
        ResolvedBase::new(self.view_name, self.view, default_title)
    }

    pub fn unknown_field(&self, attribute: &str, field: &str) -> ViewConfigError {
        ViewConfigError::UnknownField {
            view: self.view_name.to_string(),
            entity: self.entity.name.clone(),
            attribute: attribute.to_string(),
            field: field.to_string(),
        }
    }

    /// Whether `name` is a declared field or an implicit system field.
    pub fn is_known(&self, name: &str) -> bool {
        self.entity.fields.contains_key(name) || SYSTEM_FIELD_NAMES.contains(&name)
    }

    /// A declared field, or an unknown-field error naming `attribute`.
    pub fn field(&self, attribute: &str, name: &str) -> Result<&'a FieldDefinition> {
        self.entity
            .get_field(name)
            .ok_or_else(|| self.unknown_field(attribute, name))
    }

    /// Validate a field list. Enum fields in it must declare options, since
    /// they render as selects or badges.
    pub fn fields(&self, attribute: &str, names: &[String]) -> Result<Vec<String>> {
        for name in names {
            if !self.is_known(name) {
                return Err(self.unknown_field(attribute, name));
            }
            self.require_options(name)?;
        }
        Ok(names.to_vec())
    }

    /// Fail when `name` is an enum field without options.
    pub fn require_options(&self, name: &str) -> Result<()> {
        match self.entity.get_field(name) {
            Some(field) if field.field_type == FieldType::Enum && field.options.is_empty() => {
                Err(ViewConfigError::EmptyEnumOptions {
                    view: self.view_name.to_string(),
                    field: name.to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    /// An optional count attribute, which must be at least 1 when set.
    pub fn limit<T>(&self, attribute: &str, value: Option<T>, default: T) -> Result<T>
    where
        T: Copy + PartialEq + Default,
    {
        match value {
            Some(n) if n == T::default() => Err(ViewConfigError::ZeroLimit {
                view: self.view_name.to_string(),
                attribute: attribute.to_string(),
            }),
            Some(n) => Ok(n),
            None => Ok(default),
        }
    }

    /// First non-empty candidate list, validated.
    pub fn first_of(
        &self,
        attribute: &str,
        explicit: Option<&[String]>,
        configured: &[String],
        fallback: impl FnOnce() -> Vec<String>,
    ) -> Result<Vec<String>> {
        match explicit {
            Some(names) => self.fields(attribute, names),
            None if !configured.is_empty() => self.fields(attribute, configured),
            None => self.fields(attribute, &fallback()),
        }
    }

    /// Entity name for titles (e.g. "Task").
    pub fn entity_name(&self) -> &str {
        &self.entity.name
    }
}
