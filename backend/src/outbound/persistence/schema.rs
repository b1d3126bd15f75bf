//! Diesel table definitions mirroring `backend/migrations`.

diesel::table! {
    ingredients (ingredient_id) {
        ingredient_id -> Text,
        name -> Text,
        quantity -> Int4,
        category -> Text,
        availability -> Nullable<Bool>,
    }
}
