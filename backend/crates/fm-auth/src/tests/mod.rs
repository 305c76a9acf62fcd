
use crate::{InitDataValidator, LaunchData};

pub(crate) const TEST_BOT_TOKEN: &str = "123456:TEST-bot-token_for_unit_tests";

pub(crate) const ALICE_USER_JSON: &str = r#"{"id":42,"first_name":"Alice","last_name":"Liddell","username":"alice","photo_url":"https://t.me/i/userpic/320/alice.jpg","language_code":"en"}"#;

pub(crate) fn test_validator() -> InitDataValidator {
    InitDataValidator::from_bot_token(Some(TEST_BOT_TOKEN)).unwrap()
}

/// Signs `pairs` with the test token and returns init data ending in `&hash=`
pub(crate) fn signed_init_data(pairs: &[(&str, &str)]) -> String {
    let launch = LaunchData::from_pairs(pairs.iter().copied());
    test_validator().sign_launch_data(&launch)
}

pub(crate) fn alice_init_data() -> String {
    signed_init_data(&[
        ("query_id", "AAHdF6IQAAAAAN0XohDhrOrc"),
        ("user", ALICE_USER_JSON),
        ("auth_date", "1700000000"),
    ])
}
