use crate::schema::doctors;

#[derive(Queryable)]
pub struct DoctorData {
    pub did: i32,
    pub email: String,
    pub doctorname: String,
    pub dept: String,
}

#[derive(Insertable)]
#[table_name = "doctors"]
pub struct NewDoctor {
    pub email: String,
    pub doctorname: String,
    pub dept: String,
}
