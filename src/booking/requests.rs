use serde::Deserialize;

#[derive(Deserialize)]
pub struct BookRequest {
    pub login_token: String,
    pub email: String,
    pub name: String,
    pub gender: String,
    pub slot: String,
    pub disease: String,
    pub time: String,
    pub date: String,
    pub dept: String,
    pub number: String,
}

#[derive(Deserialize)]
pub struct ListBookingsRequest {
    pub login_token: String,
}

#[derive(Deserialize)]
pub struct EditBookingRequest {
    pub login_token: String,
    pub email: String,
    pub name: String,
    pub gender: String,
    pub slot: String,
    pub disease: String,
    pub time: String,
    pub date: String,
    pub dept: String,
    pub number: String,
}

#[derive(Deserialize)]
pub struct DeleteBookingRequest {
    pub login_token: String,
}
