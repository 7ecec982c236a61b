use trellis_manifest::{EntityDefinition, ListAction, ListView};

use super::{ResolvedBase, Resolver, Result};

const DEFAULT_PAGE_SIZE: u32 = 20;

/// A list view with columns, filters and actions resolved.
#[derive(Debug, Clone)]
pub struct ResolvedListView<'a> {
    pub base: ResolvedBase,
    pub entity: &'a EntityDefinition,
    pub columns: Vec<String>,
    /// Empty means no filter bar
    pub filters: Vec<String>,
    /// Empty means no search box
    pub searchable: Vec<String>,
    pub sort_field: String,
    pub page_size: u32,
    pub actions: Vec<ListAction>,
}

impl ResolvedListView<'_> {
    pub fn has_action(&self, action: ListAction) -> bool {
        self.actions.contains(&action)
    }
}

pub(super) fn resolve<'a>(r: &Resolver<'_, 'a>, view: &ListView) -> Result<ResolvedListView<'a>> {
    let ui = &r.entity.ui.list;

    let columns = r.first_of("columns", view.columns.as_deref(), &ui.columns, || {
        r.entity.display_field_names()
    })?;
    let filters = r.first_of("filters", view.filters.as_deref(), &ui.filterable, Vec::new)?;
    let searchable = r.fields("searchable", &ui.searchable)?;

    let sort_field = match &view.sort {
        Some(sort) if r.is_known(sort) => sort.clone(),
        Some(sort) => return Err(r.unknown_field("sort", sort)),
        None => columns.first().cloned().unwrap_or_else(|| "id".to_string()),
    };

    Ok(ResolvedListView {
        base: r.base(trellis_core::pluralize(r.entity_name())),
        entity: r.entity,
        columns,
        filters,
        searchable,
        sort_field,
        page_size: r.limit("pageSize", view.page_size, DEFAULT_PAGE_SIZE)?,
        actions: view
            .actions
            .clone()
            .unwrap_or_else(|| ListAction::DEFAULTS.to_vec()),
    })
}
