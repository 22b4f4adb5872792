// Diesel table definitions, kept in step with `migrations/`.

diesel::table! {
    users (id) {
        id -> Int8,
        #[max_length = 50]
        name -> Varchar,
        #[max_length = 255]
        email -> Varchar,
        #[max_length = 15]
        phone -> Nullable<Varchar>,
    }
}
