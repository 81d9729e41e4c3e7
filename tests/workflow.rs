// tests/workflow.rs

//! Ingredient list, create, edit and delete against a real database.

mod common;

use chrono::{TimeZone, Utc};
use common::{payload, setup_db_with_ingredients, setup_empty_db};
use pantry::db;
use pantry::db::models::Ingredient;
use pantry::notification::{Category, Notification};
use pantry::store::SqliteStore;
use pantry::workflow::{IngredientWorkflow, Outcome};

#[test]
fn test_second_page_of_twelve() {
    let (_dir, db_path) = setup_db_with_ingredients(12);
    let conn = db::open(&db_path).unwrap();
    let mut store = SqliteStore::new(&conn);
    let workflow = IngredientWorkflow::new(&mut store);

    let page = workflow.list(Some(2)).unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.current_page, 2);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.total_count, 12);
    assert_eq!(page.items[0].name.as_deref(), Some("Ingrédient 11"));
    assert!(page.has_previous());
    assert!(!page.has_next());
}

#[test]
fn test_list_out_of_range_page() {
    let (_dir, db_path) = setup_db_with_ingredients(3);
    let conn = db::open(&db_path).unwrap();
    let mut store = SqliteStore::new(&conn);
    let workflow = IngredientWorkflow::new(&mut store);

    assert!(workflow.list(Some(5)).unwrap().items.is_empty());
    assert_eq!(workflow.list(Some(0)).unwrap().current_page, 1);
    assert_eq!(workflow.list(None).unwrap().items.len(), 3);
}

#[test]
fn test_create_valid_ingredient() {
    let (_dir, db_path) = setup_empty_db();
    let conn = db::open(&db_path).unwrap();
    let mut store = SqliteStore::new(&conn);
    let mut workflow = IngredientWorkflow::new(&mut store);

    let outcome = workflow.create(Some(&payload("Sel", "5"))).unwrap();
    assert_eq!(outcome, Outcome::RedirectToList(Notification::created()));

    let stored = Ingredient::list_all(&conn).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name.as_deref(), Some("Sel"));
    assert_eq!(stored[0].price, Some(5.0));
    assert!(stored[0].id().is_some());
}

#[test]
fn test_create_short_name_is_rejected() {
    let (_dir, db_path) = setup_empty_db();
    let conn = db::open(&db_path).unwrap();
    let mut store = SqliteStore::new(&conn);
    let mut workflow = IngredientWorkflow::new(&mut store);

    let Outcome::ShowForm(form) = workflow.create(Some(&payload("S", "5"))).unwrap() else {
        panic!("expected the form to be shown again");
    };
    assert!(form.submitted);
    assert_eq!(form.violations.len(), 1);
    assert_eq!(form.violations[0].field, "name");
    assert_eq!(form.ingredient.name.as_deref(), Some("S"));

    assert_eq!(Ingredient::count(&conn).unwrap(), 0);
}

#[test]
fn test_create_reports_every_failing_field() {
    let (_dir, db_path) = setup_empty_db();
    let conn = db::open(&db_path).unwrap();
    let mut store = SqliteStore::new(&conn);
    let mut workflow = IngredientWorkflow::new(&mut store);

    let Outcome::ShowForm(form) = workflow.create(Some(&payload("", "250"))).unwrap() else {
        panic!("expected the form to be shown again");
    };
    let fields: Vec<_> = form.violations.iter().map(|v| v.field).collect();
    assert!(fields.contains(&"name"));
    assert!(fields.contains(&"price"));
    assert_eq!(Ingredient::count(&conn).unwrap(), 0);
}

#[test]
fn test_edit_keeps_creation_time() {
    let (_dir, db_path) = setup_empty_db();
    let conn = db::open(&db_path).unwrap();

    let mut original = Ingredient::with_values("Sel", 5.0);
    original.set_created_at(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
    let id = original.insert(&conn).unwrap();

    let mut store = SqliteStore::new(&conn);
    let mut workflow = IngredientWorkflow::new(&mut store);

    let Outcome::ShowForm(form) = workflow.edit(id, None).unwrap() else {
        panic!("expected the edit form");
    };
    assert!(!form.submitted);
    assert_eq!(form.ingredient.name.as_deref(), Some("Sel"));

    let outcome = workflow.edit(id, Some(&payload("Sel fin", "7.5"))).unwrap();
    assert_eq!(outcome, Outcome::RedirectToList(Notification::updated()));

    let stored = Ingredient::find_by_id(&conn, id).unwrap().unwrap();
    assert_eq!(stored.name.as_deref(), Some("Sel fin"));
    assert_eq!(stored.price, Some(7.5));
    assert_eq!(stored.created_at(), original.created_at());
}

#[test]
fn test_invalid_edit_leaves_row_untouched() {
    let (_dir, db_path) = setup_db_with_ingredients(1);
    let conn = db::open(&db_path).unwrap();
    let before = Ingredient::list_all(&conn).unwrap().remove(0);
    let id = before.id().unwrap();

    let mut store = SqliteStore::new(&conn);
    let mut workflow = IngredientWorkflow::new(&mut store);
    let outcome = workflow.edit(id, Some(&payload("Poivre", "-3"))).unwrap();
    assert!(matches!(outcome, Outcome::ShowForm(ref form) if form.violations[0].field == "price"));

    assert_eq!(Ingredient::find_by_id(&conn, id).unwrap().unwrap(), before);
}

#[test]
fn test_edit_unknown_id() {
    let (_dir, db_path) = setup_empty_db();
    let conn = db::open(&db_path).unwrap();
    let mut store = SqliteStore::new(&conn);
    let mut workflow = IngredientWorkflow::new(&mut store);

    let Outcome::RedirectToList(notice) = workflow.edit(999, None).unwrap() else {
        panic!("expected a redirect");
    };
    assert_eq!(notice.category, Category::Error);
}

#[test]
fn test_delete_existing_and_unknown() {
    let (_dir, db_path) = setup_db_with_ingredients(2);
    let conn = db::open(&db_path).unwrap();
    let ids: Vec<_> = Ingredient::list_all(&conn)
        .unwrap()
        .iter()
        .filter_map(Ingredient::id)
        .collect();

    let mut store = SqliteStore::new(&conn);
    let mut workflow = IngredientWorkflow::new(&mut store);

    let outcome = workflow.delete(ids[0]).unwrap();
    assert_eq!(outcome, Outcome::RedirectToList(Notification::deleted()));

    let outcome = workflow.delete(999).unwrap();
    assert_eq!(outcome, Outcome::RedirectToList(Notification::not_found()));

    let remaining = Ingredient::list_all(&conn).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id(), Some(ids[1]));
}

#[test]
fn test_deleted_ids_are_not_reused() {
    let (_dir, db_path) = setup_empty_db();
    let conn = db::open(&db_path).unwrap();
    let mut store = SqliteStore::new(&conn);
    let mut workflow = IngredientWorkflow::new(&mut store);

    workflow.create(Some(&payload("Sel", "5"))).unwrap();
    let first = Ingredient::list_all(&conn).unwrap()[0].id().unwrap();

    let mut store = SqliteStore::new(&conn);
    let mut workflow = IngredientWorkflow::new(&mut store);
    workflow.delete(first).unwrap();
    workflow.create(Some(&payload("Poivre", "3"))).unwrap();

    let second = Ingredient::list_all(&conn).unwrap()[0].id().unwrap();
    assert!(second > first);
}

#[test]
fn test_seed_into_database() {
    let (_dir, db_path) = setup_empty_db();
    let mut conn = db::open(&db_path).unwrap();

    let ids = db::transaction(&mut conn, |tx| {
        let mut store = SqliteStore::new(tx);
        pantry::seed::seed(&mut store, pantry::seed::DEFAULT_SEED_COUNT)
    })
    .unwrap();

    assert_eq!(ids.len(), 10);
    let stored = Ingredient::list_all(&conn).unwrap();
    assert_eq!(stored.len(), 10);
    assert!(
        stored
            .iter()
            .all(|i| matches!(i.price, Some(p) if (1.0..=100.0).contains(&p)))
    );
}
