#[macro_export]
macro_rules! post_funcs {
    ( $( ( $func_name:ident, $url:expr, $request:ty, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[post($url)]
                async fn $func_name(
                    pool: web::Data<DbPool>,
                    info: web::Json<$request>
                ) -> impl Responder {
                    let response = match [<$func_name _impl>](pool, info).await {
                        Ok(response) => response,
                        Err(err) => $response::err(err.to_string()),
                    };
                    HttpResponse::Ok().json(response)
                }
            }
        )+
    };
}

// Same dispatch shape, for routes carrying a record id in the path.
#[macro_export]
macro_rules! post_id_funcs {
    ( $( ( $func_name:ident, $url:expr, $request:ty, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[post($url)]
                async fn $func_name(
                    pool: web::Data<DbPool>,
                    path: web::Path<i32>,
                    info: web::Json<$request>
                ) -> impl Responder {
                    let response = match [<$func_name _impl>](pool, path.into_inner(), info).await {
                        Ok(response) => response,
                        Err(err) => $response::err(err.to_string()),
                    };
                    HttpResponse::Ok().json(response)
                }
            }
        )+
    };
}

use anyhow::bail;

pub fn assert_phone_number(number: &str) -> anyhow::Result<()> {
    if number.chars().count() != 10 {
        bail!("Please enter a valid 10-digit phone number")
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_of_ten_chars_passes() {
        assert!(assert_phone_number("1234567890").is_ok());
    }

    #[test]
    fn short_phone_fails() {
        assert!(assert_phone_number("12345").is_err());
    }

    #[test]
    fn long_phone_fails() {
        assert!(assert_phone_number("12345678901").is_err());
    }

    #[test]
    fn non_digit_chars_still_pass_at_ten() {
        // length check only, matching the booking form's behavior
        assert!(assert_phone_number("abcdefghij").is_ok());
    }
}
