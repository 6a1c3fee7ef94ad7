use axum::Json;

use crate::models::CategoryList;

/// List the expense categories the service can suggest
#[utoipa::path(
    get,
    path = "/categories",
    responses((status = 200, description = "Fixed category catalog", body = CategoryList)),
    tag = "Catalog"
)]
pub async fn get_categories() -> Json<CategoryList> {
    Json(CategoryList::all())
}
