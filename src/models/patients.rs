use crate::schema::patients;

// time/date/slot are stored as free text, exactly as submitted.
#[derive(Queryable)]
pub struct PatientData {
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

#[derive(Insertable)]
#[table_name = "patients"]
pub struct NewPatient {
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

// Edit overwrites every field of the targeted row.
#[derive(AsChangeset)]
#[table_name = "patients"]
pub struct UpdatePatient {
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
