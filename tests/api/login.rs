use crate::helpers::{spawn_app, FILLED_FORM, REQUIRED_MESSAGES};
use claim::{assert_none, assert_some};
use greekosystem::static_routes::root;
use reqwest::StatusCode;

#[tokio::test]
async fn login_page_has_title_and_ordered_fields() {
    let app = spawn_app().await;

    let response = app.get_login().await;
    assert_eq!(StatusCode::OK, response.status());
    assert!(response.headers()[reqwest::header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let html = response.text().await.unwrap();
    assert!(html.contains("<title>Greekosystem Login</title>"));

    let positions: Vec<_> = ["username", "email", "phone number", "password"]
        .iter()
        .map(|name| assert_some!(html.find(&format!(r#"name="{}""#, name))))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");

    for message in REQUIRED_MESSAGES {
        assert!(!html.contains(message));
    }
}

#[tokio::test]
async fn password_input_is_masked() {
    let app = spawn_app().await;

    let html = app.get_login().await.text().await.unwrap();

    assert!(html.contains(r#"<input type="password" name="password" placeholder="input password""#));
}

#[tokio::test]
async fn empty_submission_shows_every_message() {
    let app = spawn_app().await;

    let response = app.post_login(&[]).await;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, response.status());

    let html = response.text().await.unwrap();
    for message in REQUIRED_MESSAGES {
        assert!(html.contains(message), "{message} missing");
    }
}

#[tokio::test]
async fn whitespace_values_are_accepted() {
    let app = spawn_app().await;

    let spaces: Vec<_> = FILLED_FORM.iter().map(|(name, _)| (*name, "   ")).collect();
    let response = app.post_login(&spaces).await;
    assert_eq!(StatusCode::OK, response.status());

    let html = response.text().await.unwrap();
    for message in REQUIRED_MESSAGES {
        assert!(!html.contains(message), "{message} shown");
    }
}

#[tokio::test]
async fn empty_values_count_as_missing() {
    let app = spawn_app().await;

    let empty: Vec<_> = FILLED_FORM.iter().map(|(name, _)| (*name, "")).collect();
    let response = app.post_login(&empty).await;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, response.status());

    let html = response.text().await.unwrap();
    for message in REQUIRED_MESSAGES {
        assert!(html.contains(message), "{message} missing");
    }
}

#[tokio::test]
async fn each_missing_field_reports_only_its_message() {
    let app = spawn_app().await;

    for (missing, expected) in FILLED_FORM.iter().zip(REQUIRED_MESSAGES) {
        let body: Vec<_> = FILLED_FORM
            .iter()
            .copied()
            .filter(|(name, _)| *name != missing.0)
            .collect();

        let response = app.post_login(&body).await;
        assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, response.status());

        let html = response.text().await.unwrap();
        for message in REQUIRED_MESSAGES {
            assert_eq!(
                html.contains(message),
                message == expected,
                "{message} while missing {}",
                missing.0
            );
        }
    }
}

#[tokio::test]
async fn filled_submission_shows_no_messages() {
    let app = spawn_app().await;

    let response = app.post_login(&FILLED_FORM).await;
    assert_eq!(StatusCode::OK, response.status());

    let html = response.text().await.unwrap();
    for message in REQUIRED_MESSAGES {
        assert!(!html.contains(message));
    }
    assert!(html.contains(r#"value="zeus@olymp.gr""#));
}

#[tokio::test]
async fn submitted_password_is_not_echoed() {
    let app = spawn_app().await;

    let response = app.post_login(&FILLED_FORM).await;
    let html = response.text().await.unwrap();

    assert_none!(html.find("thunderbolt"));
}

#[tokio::test]
async fn non_form_body_is_treated_as_empty() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(format!("{}{}", app.address, root::LOGIN))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(r#"{"username":"zeus"}"#)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, response.status());
    let html = response.text().await.unwrap();
    assert!(html.contains("Please input your Username!"));
}
