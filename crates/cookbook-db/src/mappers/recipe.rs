//! Recipe model -> entity mapper

use cookbook_core::entities::Recipe;

use crate::models::RecipeModel;

impl From<RecipeModel> for Recipe {
    fn from(model: RecipeModel) -> Self {
        Recipe {
            id: model.id,
            label: model.label,
            url: model.url,
            source: model.source,
            submitter_id: model.submitter_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
