use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterDoctorRequest {
    pub email: String,
    pub doctorname: String,
    pub dept: String,
}

#[derive(Deserialize)]
pub struct SearchRequest {
    pub login_token: String,
    pub search: String,
}
