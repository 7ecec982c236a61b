//! Route conventions for generated views.

use trellis_core::{pluralize, to_kebab_case};
use trellis_manifest::{FormMode, ViewDefinition};

/// Placeholder segment for a record id in route patterns.
pub const ID_SEGMENT: &str = ":id";

/// The CRUD routes of one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRoutes {
    /// e.g. `/tasks`
    pub list: String,
    /// e.g. `/tasks/new`
    pub create: String,
    /// e.g. `/tasks/:id`
    pub detail: String,
    /// e.g. `/tasks/:id/edit`
    pub edit: String,
}

impl EntityRoutes {
    /// Routes under `/<plural-kebab-entity>`.
    pub fn for_entity(entity: &str) -> Self {
        Self::under(&format!("/{}", to_kebab_case(&pluralize(entity))))
    }

    /// Routes under an explicit base path.
    pub fn under(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            list: base.to_string(),
            create: format!("{}/new", base),
            detail: format!("{}/{}", base, ID_SEGMENT),
            edit: format!("{}/{}/edit", base, ID_SEGMENT),
        }
    }
}

/// Form mode of a form view: explicit, else `edit` when the route carries an
/// id segment, else `create`.
pub fn form_mode(mode: Option<FormMode>, route: Option<&str>) -> FormMode {
    match (mode, route) {
        (Some(mode), _) => mode,
        (None, Some(route)) if route.contains(ID_SEGMENT) => FormMode::Edit,
        _ => FormMode::Create,
    }
}

/// The route a view is served at: explicit, else derived from its kind and
/// entity.
pub fn view_route(name: &str, view: &ViewDefinition) -> String {
    if let Some(route) = view.route() {
        return route.to_string();
    }

    let Some(entity) = view.entity() else {
        return format!("/{}", to_kebab_case(name));
    };
    let routes = EntityRoutes::for_entity(entity);

    match view {
        ViewDefinition::List(_) => routes.list,
        ViewDefinition::Detail(_) => routes.detail,
        ViewDefinition::Form(form) => match form_mode(form.mode, None) {
            FormMode::Create => routes.create,
            FormMode::Edit => routes.edit,
        },
        ViewDefinition::Kanban(_) => format!("{}/board", routes.list),
        ViewDefinition::Calendar(_) => format!("{}/calendar", routes.list),
        ViewDefinition::Dashboard(_) => format!("{}/dashboard", routes.list),
        ViewDefinition::Custom(_) => format!("/{}", to_kebab_case(name)),
    }
}
