use trellis_codegen::{resolve::ResolvedKanbanView, template::Substitution};

use crate::{
    ast::{JsArray, JsObject, js_string},
    fragments,
};

pub(super) fn tokens(
    view: &ResolvedKanbanView<'_>,
    tokens: &mut Substitution,
) -> serde_json::Result<()> {
    let columns = view.columns.iter().fold(JsArray::new(), |arr, column| {
        arr.object(
            JsObject::new()
                .string("id", &column.id)
                .string("title", &column.title),
        )
    });

    tokens
        .set("GROUP_BY", js_string(&view.group_by))
        .set("KANBAN_COLUMNS", columns.build_multiline())
        .set("CARD_CONTENT", fragments::card_content(view));
    Ok(())
}
