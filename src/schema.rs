table! {
    doctors (did) {
        did -> Integer,
        email -> Varchar,
        doctorname -> Varchar,
        dept -> Varchar,
    }
}

table! {
    patients (pid) {
        pid -> Integer,
        email -> Varchar,
        name -> Varchar,
        gender -> Varchar,
        slot -> Varchar,
        disease -> Varchar,
        time -> Varchar,
        date -> Varchar,
        dept -> Varchar,
        number -> Varchar,
    }
}

table! {
    user_logins (token) {
        token -> Char,
        user_id -> Integer,
        login_time -> Datetime,
    }
}

table! {
    users (id) {
        id -> Integer,
        username -> Varchar,
        usertype -> Varchar,
        email -> Varchar,
        password -> Varchar,
    }
}

allow_tables_to_appear_in_same_query!(
    doctors,
    patients,
    user_logins,
    users,
);
