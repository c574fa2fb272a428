use serde::Serialize;

#[derive(Default, Serialize)]
pub struct BookingItem {
    pub pid: i32,
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

#[derive(Default, Serialize)]
pub struct ListBookingsResponse {
    pub success: bool,
    pub err: String,
    pub bookings: Vec<BookingItem>,
}

crate::impl_err_response! {
    ListBookingsResponse,
}
