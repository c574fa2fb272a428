use serde::Serialize;

#[derive(Default, Serialize)]
pub struct DoctorItem {
    pub did: i32,
    pub email: String,
    pub doctorname: String,
    pub dept: String,
}

#[derive(Default, Serialize)]
pub struct ListDoctorsResponse {
    pub success: bool,
    pub err: String,
    pub doctors: Vec<DoctorItem>,
}

crate::impl_err_response! {
    ListDoctorsResponse,
}
