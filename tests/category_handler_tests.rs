mod common;

use common::{
    accommodation_tree, assert_error, assert_json_response, body_json, number_question, send,
    server_with,
};
use spendcat::http::wire::CategoryGetResponse;
use spendcat::http::HttpMethod;
use spendcat_domain::{Category, CategoryList};

#[test]
fn list_returns_every_category() {
    let server = server_with(accommodation_tree(), Vec::new());

    let response = send(&server, HttpMethod::Get, "/categories", "");

    assert_eq!(response.status.as_u16(), 200);
    assert_json_response(&response);
    let list: CategoryList = response.json_body().expect("category list");
    assert_eq!(list.categories, accommodation_tree());
}

#[test]
fn empty_store_lists_no_categories() {
    let server = server_with(Vec::new(), Vec::new());

    let response = send(&server, HttpMethod::Get, "/categories", "");

    assert_eq!(body_json(&response), serde_json::json!({"categories": []}));
}

#[test]
fn get_attaches_direct_children() {
    let server = server_with(accommodation_tree(), Vec::new());

    let response = send(&server, HttpMethod::Get, "/categories/1234", "");

    assert_eq!(response.status.as_u16(), 200);
    let got: CategoryGetResponse = response.json_body().expect("category");
    assert_eq!(got.category, Category::new("1234", "accommodation"));
    let children: Vec<&str> = got.children.iter().map(|child| child.id.as_str()).collect();
    assert_eq!(children, ["abcdef", "ghijkm"]);
}

#[test]
fn get_child_has_no_children() {
    let server = server_with(accommodation_tree(), Vec::new());

    let response = send(&server, HttpMethod::Get, "/categories/abcdef", "");

    let got: CategoryGetResponse = response.json_body().expect("category");
    assert_eq!(got.category.parent_id, "1234");
    assert!(got.children.is_empty());
}

#[test]
fn get_unknown_category_is_not_found() {
    let server = server_with(accommodation_tree(), Vec::new());

    let response = send(&server, HttpMethod::Get, "/categories/5678", "");

    assert_error(&response, 404, "CategoryNotFound");
}

#[test]
fn create_rejections_leave_store_unchanged() {
    let seeded = vec![
        Category::new("1234", "existing category name"),
        Category::new("2345", "existing subcategory name").with_parent("1234"),
    ];
    let server = server_with(seeded.clone(), Vec::new());

    let cases = [
        ("invalid json", r#""foo""#, 400, "InvalidJSON"),
        ("truncated json", r#"{"name":"#, 400, "InvalidJSON"),
        ("name missing", r#"{"parentID":""}"#, 400, "FieldMissing"),
        (
            "duplicate name",
            r#"{"name":"existing category name"}"#,
            409,
            "DuplicateCategoryName",
        ),
        ("invalid name", r#"{"name":"abc123!@£"}"#, 422, "InvalidCategoryName"),
        ("parentID missing", r#"{"name":"valid name"}"#, 400, "FieldMissing"),
        (
            "parentID doesn't exist",
            r#"{"name":"foo", "parentID":"5678"}"#,
            422,
            "ParentIDNotFound",
        ),
        (
            "too nested",
            r#"{"name":"foo", "parentID":"2345"}"#,
            422,
            "CategoryTooNested",
        ),
    ];

    for (name, body, status, title) in cases {
        let response = send(&server, HttpMethod::Post, "/categories", body);
        assert_error(&response, status, title);
        assert_eq!(
            server.categories().list().categories,
            seeded,
            "store changed after `{name}`"
        );
    }
}

#[test]
fn name_errors_win_over_parent_errors() {
    let server = server_with(accommodation_tree(), Vec::new());

    let response = send(
        &server,
        HttpMethod::Post,
        "/categories",
        r#"{"name":"bad/name", "parentID":"nope"}"#,
    );

    assert_error(&response, 422, "InvalidCategoryName");
}

#[test]
fn create_top_level_category() {
    let server = server_with(accommodation_tree(), Vec::new());

    let response = send(
        &server,
        HttpMethod::Post,
        "/categories",
        r#"{"name":"new category name","parentID":""}"#,
    );

    assert_eq!(response.status.as_u16(), 201);
    assert_json_response(&response);
    let created: Category = response.json_body().expect("category");
    assert_eq!(created.name, "new category name");
    assert_eq!(created.parent_id, "");
    assert_eq!(response.location(), Some(format!("/categories/{}", created.id).as_str()));
    assert_eq!(server.categories().len(), 5);
}

#[test]
fn create_child_then_fetch_by_location() {
    let server = server_with(accommodation_tree(), Vec::new());

    let created = send(
        &server,
        HttpMethod::Post,
        "/categories",
        r#"{"name":"another new category name","parentID":"1234"}"#,
    );
    let location = created.location().expect("location header").to_string();

    let fetched = send(&server, HttpMethod::Get, &location, "");

    assert_eq!(fetched.status.as_u16(), 200);
    let got: CategoryGetResponse = fetched.json_body().expect("category");
    assert_eq!(got.category.name, "another new category name");
    assert_eq!(got.category.parent_id, "1234");
    let parent: CategoryGetResponse = send(&server, HttpMethod::Get, "/categories/1234", "")
        .json_body()
        .expect("parent");
    assert_eq!(parent.children.len(), 3);
}

#[test]
fn default_ids_are_hex_and_unique() {
    let server = spendcat::http::Server::in_memory();
    let pattern = regex::Regex::new("^[0-9a-f]{32}$").expect("regex");

    let first: Category = send(&server, HttpMethod::Post, "/categories", r#"{"name":"a","parentID":""}"#)
        .json_body()
        .expect("first");
    let second: Category = send(&server, HttpMethod::Post, "/categories", r#"{"name":"b","parentID":""}"#)
        .json_body()
        .expect("second");

    assert!(pattern.is_match(&first.id), "{}", first.id);
    assert!(pattern.is_match(&second.id), "{}", second.id);
    assert_ne!(first.id, second.id);
}

#[test]
fn rename_rejections_leave_store_unchanged() {
    let seeded = vec![
        Category::new("1234", "accommodation"),
        Category::new("2345", "food and drink"),
    ];
    let server = server_with(seeded.clone(), Vec::new());

    let cases = [
        ("1234", r#"{"foo":"#, 400, "InvalidJSON"),
        ("1234", r#"{"foo":"bar"}"#, 400, "FieldMissing"),
        ("1234", r#"{"name":"foo/*!bar"}"#, 422, "InvalidCategoryName"),
        ("1234", r#"{"name":"food and drink"}"#, 409, "DuplicateCategoryName"),
        ("5678", r#"{"name":"irrelevant"}"#, 404, "CategoryNotFound"),
    ];

    for (id, body, status, title) in cases {
        let response = send(&server, HttpMethod::Patch, &format!("/categories/{id}"), body);
        assert_error(&response, status, title);
        assert_eq!(server.categories().list().categories, seeded);
    }
}

#[test]
fn rename_updates_name_only() {
    let server = server_with(accommodation_tree(), Vec::new());

    let response = send(
        &server,
        HttpMethod::Patch,
        "/categories/abcdef",
        r#"{"name":"new category name"}"#,
    );

    assert_eq!(response.status.as_u16(), 200);
    let renamed: Category = response.json_body().expect("category");
    assert_eq!(
        renamed,
        Category::new("abcdef", "new category name").with_parent("1234")
    );
    let names: Vec<String> = server
        .categories()
        .list()
        .categories
        .into_iter()
        .map(|category| category.name)
        .collect();
    assert_eq!(
        names,
        ["accommodation", "food and drink", "new category name", "apartment"]
    );
}

#[test]
fn rename_to_current_name_succeeds() {
    let server = server_with(accommodation_tree(), Vec::new());

    let response = send(
        &server,
        HttpMethod::Patch,
        "/categories/1234",
        r#"{"name":"accommodation"}"#,
    );

    assert_eq!(response.status.as_u16(), 200);
    assert_eq!(server.categories().list().categories, accommodation_tree());
}

#[test]
fn delete_unknown_category_is_not_found() {
    let server = server_with(vec![Category::new("1234", "accommodation")], Vec::new());

    let response = send(&server, HttpMethod::Delete, "/categories/5678", "");

    assert_error(&response, 404, "CategoryNotFound");
    assert_eq!(server.categories().len(), 1);
}

#[test]
fn delete_removes_category() {
    let server = server_with(vec![Category::new("1234", "accommodation")], Vec::new());

    let response = send(&server, HttpMethod::Delete, "/categories/1234", "");

    assert_eq!(response.status.as_u16(), 200);
    assert_json_response(&response);
    assert_eq!(body_json(&response), serde_json::json!({"status": "deleted"}));
    assert!(server.categories().is_empty());
    assert_error(
        &send(&server, HttpMethod::Get, "/categories/1234", ""),
        404,
        "CategoryNotFound",
    );
}

#[test]
fn delete_parent_with_children_is_refused() {
    let server = server_with(accommodation_tree(), Vec::new());

    let response = send(&server, HttpMethod::Delete, "/categories/1234", "");

    assert_error(&response, 409, "CategoryHasChildren");
    assert_eq!(server.categories().list().categories, accommodation_tree());
}

#[test]
fn delete_category_with_questions_is_refused() {
    let questions = vec![number_question("1", "how many nights?", "abcdef")];
    let server = server_with(accommodation_tree(), questions.clone());

    let response = send(&server, HttpMethod::Delete, "/categories/abcdef", "");

    assert_error(&response, 409, "CategoryHasQuestions");
    assert_eq!(server.categories().list().categories, accommodation_tree());
    assert_eq!(server.questions().list_all().questions, questions);
}

#[test]
fn delete_succeeds_once_questions_are_gone() {
    let server = server_with(
        accommodation_tree(),
        vec![number_question("1", "how many nights?", "abcdef")],
    );

    let question = send(&server, HttpMethod::Delete, "/categories/abcdef/questions/1", "");
    let category = send(&server, HttpMethod::Delete, "/categories/abcdef", "");

    assert_eq!(question.status.as_u16(), 200);
    assert_eq!(category.status.as_u16(), 200);
    assert!(!server.categories().contains("abcdef"));
}

#[test]
fn blank_names_are_rejected() {
    let server = server_with(accommodation_tree(), Vec::new());

    let created = send(
        &server,
        HttpMethod::Post,
        "/categories",
        r#"{"name":"   ","parentID":""}"#,
    );
    let renamed = send(&server, HttpMethod::Patch, "/categories/1234", r#"{"name":" "}"#);

    assert_error(&created, 422, "InvalidCategoryName");
    assert_error(&renamed, 422, "InvalidCategoryName");
    assert_eq!(server.categories().list().categories, accommodation_tree());
}
