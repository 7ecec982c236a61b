use trellis_codegen::{resolve::ResolvedListView, template::Substitution};

use crate::fragments;

pub(super) fn tokens(
    view: &ResolvedListView<'_>,
    tokens: &mut Substitution,
) -> serde_json::Result<()> {
    tokens
        .set(
            "COLUMNS_CONFIG",
            fragments::columns_config(&view.columns, view.entity)?,
        )
        .set("PAGE_SIZE", view.page_size.to_string())
        .set("FIRST_COLUMN", fragments::sort_field(view))
        .set("CREATE_BUTTON", fragments::create_button(view))
        .set("SEARCH_BOX", fragments::search_box(view))
        .set("SEARCH_MATCH", fragments::search_match(view))
        .set("FILTER_BAR", fragments::filter_bar(view))
        .set("TABLE_ACTIONS", fragments::table_actions(view));
    Ok(())
}
