use crate::schema::users;
use anyhow::bail;

pub const USER_TYPE_PATIENT: &str = "Patient";
pub const USER_TYPE_DOCTOR: &str = "Doctor";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserType {
    Patient,
    Doctor,
}

impl UserType {
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        match s {
            USER_TYPE_PATIENT => Ok(UserType::Patient),
            USER_TYPE_DOCTOR => Ok(UserType::Doctor),
            _ => bail!("Unknown user type"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Patient => USER_TYPE_PATIENT,
            UserType::Doctor => USER_TYPE_DOCTOR,
        }
    }

    // Doctor accounts see every booking, patients only their own.
    pub fn can_view_all_bookings(&self) -> bool {
        matches!(self, UserType::Doctor)
    }
}

#[derive(Queryable, Identifiable)]
#[primary_key(id)]
#[table_name = "users"]
pub struct UserData {
    pub id: i32,
    pub username: String,
    pub usertype: String,
    pub email: String,
    pub password: String,
}

impl UserData {
    pub fn usertype(&self) -> anyhow::Result<UserType> {
        UserType::parse(&self.usertype)
    }

    /// Listing scope for this account: `None` means every booking is visible,
    /// `Some(email)` restricts the listing to rows stored under that email.
    pub fn booking_scope(&self) -> anyhow::Result<Option<&str>> {
        if self.usertype()?.can_view_all_bookings() {
            Ok(None)
        } else {
            Ok(Some(&self.email))
        }
    }
}

#[derive(Insertable)]
#[table_name = "users"]
pub struct NewUser {
    pub username: String,
    pub usertype: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_both_roles() {
        assert_eq!(UserType::parse("Patient").unwrap(), UserType::Patient);
        assert_eq!(UserType::parse("Doctor").unwrap(), UserType::Doctor);
    }

    #[test]
    fn parse_rejects_unknown_and_wrong_case() {
        assert!(UserType::parse("Admin").is_err());
        assert!(UserType::parse("patient").is_err());
        assert!(UserType::parse("").is_err());
    }

    #[test]
    fn only_doctor_views_all_bookings() {
        assert!(UserType::Doctor.can_view_all_bookings());
        assert!(!UserType::Patient.can_view_all_bookings());
    }

    fn account(usertype: &str, email: &str) -> UserData {
        UserData {
            id: 1,
            username: "u".to_string(),
            usertype: usertype.to_string(),
            email: email.to_string(),
            password: "".to_string(),
        }
    }

    #[test]
    fn doctor_scope_is_unrestricted() {
        let user = account("Doctor", "doc@x.com");
        assert_eq!(user.booking_scope().unwrap(), None);
    }

    #[test]
    fn patient_scope_is_own_email() {
        let user = account("Patient", "a@x.com");
        assert_eq!(user.booking_scope().unwrap(), Some("a@x.com"));
    }

    #[test]
    fn unknown_role_has_no_scope() {
        let user = account("Admin", "a@x.com");
        assert!(user.booking_scope().is_err());
    }

    #[test]
    fn as_str_round_trips() {
        for ty in [UserType::Patient, UserType::Doctor].iter() {
            assert_eq!(UserType::parse(ty.as_str()).unwrap(), *ty);
        }
    }
}
