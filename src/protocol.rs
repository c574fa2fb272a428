use serde::Serialize;

#[derive(Default, Serialize)]
pub struct SimpleResponse {
    pub success: bool,
    pub err: String,
    pub msg: String,
}

impl SimpleResponse {
    pub fn ok<S: ToString>(msg: S) -> Self {
        Self {
            success: true,
            err: "".to_string(),
            msg: msg.to_string(),
        }
    }
}

#[macro_export]
macro_rules! impl_err_response {
    ( $( $type:ty),+ $(,)? ) => {
        $(
            impl $type {
                pub fn err<S: ToString>(err: S) -> Self {
                    Self {
                        success: false,
                        err: err.to_string(),
                        ..Default::default()
                    }
                }
            }
        )+
    };
}

impl_err_response! {
    SimpleResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_carries_notice() {
        let resp = SimpleResponse::ok("Appointment Booked Successfully");
        assert!(resp.success);
        assert_eq!(resp.msg, "Appointment Booked Successfully");
        assert!(resp.err.is_empty());
    }

    #[test]
    fn err_clears_notice() {
        let resp = SimpleResponse::err("Invalid Credentials");
        assert!(!resp.success);
        assert_eq!(resp.err, "Invalid Credentials");
        assert!(resp.msg.is_empty());
    }

    #[test]
    fn wire_shape() {
        let value = serde_json::to_value(SimpleResponse::ok("Login Successful")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "success": true,
                "err": "",
                "msg": "Login Successful",
            })
        );
    }
}
