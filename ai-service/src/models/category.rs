use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Category {
    #[schema(value_type = String, example = "food")]
    pub id: &'static str,
    #[schema(value_type = String, example = "Food & Dining")]
    pub name: &'static str,
    #[schema(value_type = String, example = "🍽️")]
    pub icon: &'static str,
}

/// Body of `GET /categories`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryList {
    #[schema(value_type = Vec<Category>)]
    pub categories: &'static [Category],
}

pub const CATEGORIES: [Category; 9] = [
    Category {
        id: "food",
        name: "Food & Dining",
        icon: "🍽️",
    },
    Category {
        id: "transport",
        name: "Transportation",
        icon: "🚗",
    },
    Category {
        id: "entertainment",
        name: "Entertainment",
        icon: "🎬",
    },
    Category {
        id: "shopping",
        name: "Shopping",
        icon: "🛍️",
    },
    Category {
        id: "utilities",
        name: "Utilities",
        icon: "⚡",
    },
    Category {
        id: "health",
        name: "Healthcare",
        icon: "🏥",
    },
    Category {
        id: "education",
        name: "Education",
        icon: "📚",
    },
    Category {
        id: "travel",
        name: "Travel",
        icon: "✈️",
    },
    Category {
        id: "other",
        name: "Other",
        icon: "📦",
    },
];

impl CategoryList {
    pub fn all() -> Self {
        Self {
            categories: &CATEGORIES,
        }
    }
}
