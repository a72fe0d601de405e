use meal_finder::api::{MealDbClient, MealSource};
use meal_finder::config::ClientConfig;
use meal_finder::error::ApiError;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> MealDbClient {
    MealDbClient::new(&ClientConfig::with_base_url(server.uri())).unwrap()
}

fn meal_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "idMeal": id,
        "strMeal": name,
        "strMealThumb": format!("https://www.themealdb.com/images/media/meals/{id}.jpg")
    })
}

#[tokio::test]
async fn search_sends_ingredient_and_parses_meals() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/filter.php"))
        .and(query_param("i", "chicken breast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meals": [meal_json("52940", "Brown Stew Chicken"), meal_json("52846", "Chicken & mushroom Hotpot")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let meals = client_for(&server)
        .search_by_ingredient("chicken breast")
        .await
        .unwrap();

    assert_eq!(meals.len(), 2);
    assert_eq!(meals[0].id, "52940");
    assert_eq!(meals[1].name, "Chicken & mushroom Hotpot");
    assert!(meals[0].thumbnail_url.ends_with("52940.jpg"));
}

#[tokio::test]
async fn search_with_null_meals_is_empty_not_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/filter.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "meals": null })))
        .mount(&server)
        .await;

    let meals = client_for(&server).search_by_ingredient("chicken").await.unwrap();
    assert!(meals.is_empty());
}

#[tokio::test]
async fn not_found_maps_to_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/filter.php"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).search_by_ingredient("egg").await.unwrap_err();
    match &err {
        ApiError::Server {
            status,
            status_text,
        } => {
            assert_eq!(*status, 404);
            assert_eq!(status_text, "Not Found");
        }
        other => panic!("expected server error, got {other:?}"),
    }
    assert!(err.user_message().contains("404"));
}

#[tokio::test]
async fn malformed_body_maps_to_unexpected_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/random.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).random_meal().await.unwrap_err();
    let ApiError::Unexpected { message } = &err else {
        panic!("expected unexpected error, got {err:?}");
    };
    let shown = err.user_message();
    assert!(shown.starts_with("Unexpected error: "));
    assert!(shown.contains(message.as_str()));
}

#[tokio::test]
async fn random_meal_takes_first_entry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/random.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meals": [meal_json("53013", "Big Mac")]
        })))
        .mount(&server)
        .await;

    let meal = client_for(&server).random_meal().await.unwrap();
    assert_eq!(meal.id, "53013");
    assert_eq!(meal.name, "Big Mac");
}

#[tokio::test]
async fn random_meal_without_meals_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/random.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "meals": null })))
        .mount(&server)
        .await;

    let err = client_for(&server).random_meal().await.unwrap_err();
    assert!(matches!(err, ApiError::EmptyResponse));
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    // Grab a free port and release it so nothing is listening there.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client =
        MealDbClient::new(&ClientConfig::with_base_url(format!("http://127.0.0.1:{port}"))).unwrap();

    let err = client.search_by_ingredient("egg").await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
    assert_eq!(
        err.user_message(),
        "Network error: Unable to reach the server. Please check your connection."
    );
}

#[tokio::test]
async fn unbuildable_request_is_unexpected_error() {
    // Passes the scheme check but the host cannot be parsed.
    let client = MealDbClient::new(&ClientConfig::with_base_url("http://bad host")).unwrap();

    let err = client.random_meal().await.unwrap_err();
    assert!(matches!(err, ApiError::Unexpected { .. }), "got {err:?}");
    assert!(err.user_message().starts_with("Unexpected error: "));
}
