table! {
    establishment (rowid) {
        rowid -> BigInt,
        id -> Text,
        created_at -> BigInt,
        street -> Nullable<Text>,
        suburb -> Nullable<Text>,
        city -> Nullable<Text>,
        postal_code -> Nullable<Text>,
        state -> Nullable<Text>,
        country -> Nullable<Text>,
        lat -> Nullable<Double>,
        lng -> Nullable<Double>,
    }
}

table! {
    delivery (rowid) {
        rowid -> BigInt,
        id -> Text,
        user_id -> BigInt,
        created_at -> BigInt,
        street -> Nullable<Text>,
        suburb -> Nullable<Text>,
        city -> Nullable<Text>,
        postal_code -> Nullable<Text>,
        state -> Nullable<Text>,
        country -> Nullable<Text>,
        lat -> Nullable<Double>,
        lng -> Nullable<Double>,
        deleted -> SmallInt,
    }
}
