table! {
    locations (id) {
        id -> Integer,
        name -> Text,
    }
}

table! {
    props (id) {
        id -> Integer,
        #[sql_name = "Location"]
        location -> Nullable<Text>,
        #[sql_name = "Storage_id"]
        storage_id -> Text,
        #[sql_name = "Description"]
        description -> Nullable<Text>,
        #[sql_name = "Keywords"]
        keywords -> Nullable<Text>,
        #[sql_name = "Category"]
        category -> Nullable<Text>,
        #[sql_name = "Status"]
        status -> Nullable<Text>,
        #[sql_name = "Quantity"]
        quantity -> Nullable<Integer>,
        file -> Nullable<Text>,
        timestamp -> Nullable<Text>,
    }
}

table! {
    users (id) {
        id -> Integer,
        username -> Text,
        password -> Text,
    }
}

allow_tables_to_appear_in_same_query!(
    locations,
    props,
    users,
);
