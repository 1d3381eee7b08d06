//! End-to-end ordering flow against an embedded database.
//! Run: cargo test -p delivery-server --test purchase_flow

use delivery_server::ErrorCode;
use delivery_server::db::DbService;
use delivery_server::db::repository::{
    CityRepository, CustomerRepository, FoodCategoryRepository, MenuItemRepository,
    PurchaseRepository, RestaurantRepository, RoleRepository,
};
use rust_decimal::Decimal;
use shared::models::{
    CityCreate, CustomerCreate, FoodCategoryCreate, MenuItemCreate, MenuItemUpdate,
    PurchaseCreate, RestaurantCreate, RoleCreate,
};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

async fn setup() -> (tempfile::TempDir, Surreal<Db>) {
    let tmp = tempfile::tempdir().unwrap();
    let service = DbService::new(tmp.path()).await.unwrap();
    (tmp, service.db)
}

fn city_payload(name: &str) -> CityCreate {
    CityCreate {
        name: name.to_string(),
        zipcode: "33101".to_string(),
    }
}

fn menu_item_payload(name: &str, price: Decimal, time_to_cook: Decimal) -> MenuItemCreate {
    MenuItemCreate {
        name: name.to_string(),
        ingredients: "tomato, mozzarella, basil".to_string(),
        price,
        time_to_cook,
    }
}

/// Build the full catalog chain and return
/// (restaurant_id, customer_id, item_ids).
async fn seed_catalog(db: &Surreal<Db>) -> (String, String, Vec<String>) {
    let cities = CityRepository::new(db.clone());
    let restaurants = RestaurantRepository::new(db.clone());
    let categories = FoodCategoryRepository::new(db.clone());
    let items = MenuItemRepository::new(db.clone());
    let roles = RoleRepository::new(db.clone());
    let customers = CustomerRepository::new(db.clone());

    let city = cities.create(city_payload("Miami")).await.unwrap();
    let city_id = city.id.as_ref().unwrap().to_string();

    let restaurant = restaurants
        .create_in_city(
            &city_id,
            RestaurantCreate {
                name: "Trattoria Bella".to_string(),
                address: "12 Ocean Drive".to_string(),
            },
        )
        .await
        .unwrap();
    let restaurant_id = restaurant.id.as_ref().unwrap().to_string();

    let category = categories
        .create_in_restaurant(
            &restaurant_id,
            FoodCategoryCreate {
                name: "Italian".to_string(),
            },
        )
        .await
        .unwrap();
    let category_id = category.id.as_ref().unwrap().to_string();

    let pizza = items
        .create_in_category(
            &category_id,
            menu_item_payload("Pizza Margherita", Decimal::new(3599, 2), Decimal::from(20)),
        )
        .await
        .unwrap();
    let pasta = items
        .create_in_category(
            &category_id,
            menu_item_payload("Pasta Carbonara", Decimal::new(3250, 2), Decimal::from(17)),
        )
        .await
        .unwrap();

    let role = roles
        .create(RoleCreate {
            name: "regular".to_string(),
        })
        .await
        .unwrap();
    let role_id = role.id.as_ref().unwrap().to_string();

    let customer = customers
        .create(CustomerCreate {
            name: "Ana Gomez".to_string(),
            city: city_id,
            address: "742 Palm Street".to_string(),
            phone: "3055550123".to_string(),
            email: "ana@example.com".to_string(),
            password: "s3cretpass".to_string(),
            roles: vec![role_id],
        })
        .await
        .unwrap();
    let customer_id = customer.id.as_ref().unwrap().to_string();

    (
        restaurant_id,
        customer_id,
        vec![
            pizza.id.as_ref().unwrap().to_string(),
            pasta.id.as_ref().unwrap().to_string(),
        ],
    )
}

#[tokio::test]
async fn full_ordering_flow() {
    let (_tmp, db) = setup().await;
    let (restaurant_id, customer_id, item_ids) = seed_catalog(&db).await;

    let purchases = PurchaseRepository::new(db.clone());
    let purchase = purchases
        .place(PurchaseCreate {
            restaurant: restaurant_id,
            customer: customer_id,
            purchase_placed_time: "2022-06-18 14:30".to_string(),
            menu_items: item_ids,
        })
        .await
        .unwrap();

    // 35.99 and 32.50 truncate to 35 and 32
    assert_eq!(purchase.price, Decimal::from(67));
    assert_eq!(purchase.purchase_placed_time, "2022-06-18 14:30");
    // 30 minutes of transit plus the slowest cook time (20 minutes)
    assert_eq!(purchase.estimated_delivery_time, "2022-06-18 15:20");
    assert!(purchase.actual_delivery_time.is_none());
    assert_eq!(purchase.menu_items.len(), 2);

    let purchase_id = purchase.id.as_ref().unwrap().to_string();
    let fetched = purchases.get_by_id(&purchase_id).await.unwrap();
    assert_eq!(fetched.price, Decimal::from(67));
}

#[tokio::test]
async fn record_actual_delivery_overwrites() {
    let (_tmp, db) = setup().await;
    let (restaurant_id, customer_id, item_ids) = seed_catalog(&db).await;

    let purchases = PurchaseRepository::new(db.clone());
    let purchase = purchases
        .place(PurchaseCreate {
            restaurant: restaurant_id,
            customer: customer_id,
            purchase_placed_time: "2022-06-18 14:30".to_string(),
            menu_items: item_ids,
        })
        .await
        .unwrap();
    let purchase_id = purchase.id.as_ref().unwrap().to_string();

    let delivered = purchases
        .record_actual_delivery(&purchase_id, "2022-06-18 15:12")
        .await
        .unwrap();
    assert_eq!(delivered.actual_delivery_time.as_deref(), Some("2022-06-18 15:12"));

    // Recording again overwrites the earlier value
    let corrected = purchases
        .record_actual_delivery(&purchase_id, "2022-06-18 15:25")
        .await
        .unwrap();
    assert_eq!(corrected.actual_delivery_time.as_deref(), Some("2022-06-18 15:25"));

    // A time-only string is not an acceptable delivery time
    let err = purchases
        .record_actual_delivery(&purchase_id, "16:45:30")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::IncorrectDateFormat);
}

#[tokio::test]
async fn purchase_requires_items() {
    let (_tmp, db) = setup().await;
    let (restaurant_id, customer_id, _item_ids) = seed_catalog(&db).await;

    let purchases = PurchaseRepository::new(db.clone());
    let err = purchases
        .place(PurchaseCreate {
            restaurant: restaurant_id,
            customer: customer_id,
            purchase_placed_time: "2022-06-18 14:30".to_string(),
            menu_items: vec![],
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::NoItemsSelected);

    // Nothing was persisted
    assert!(purchases.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn bad_placed_time_rejected() {
    let (_tmp, db) = setup().await;
    let (restaurant_id, customer_id, item_ids) = seed_catalog(&db).await;

    let purchases = PurchaseRepository::new(db.clone());
    let err = purchases
        .place(PurchaseCreate {
            restaurant: restaurant_id,
            customer: customer_id,
            purchase_placed_time: "16:45:30".to_string(),
            menu_items: item_ids,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::IncorrectDateFormat);
    assert!(purchases.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn purchase_with_unknown_item_rejected() {
    let (_tmp, db) = setup().await;
    let (restaurant_id, customer_id, _item_ids) = seed_catalog(&db).await;

    let purchases = PurchaseRepository::new(db.clone());
    let err = purchases
        .place(PurchaseCreate {
            restaurant: restaurant_id,
            customer: customer_id,
            purchase_placed_time: "2022-06-18 14:30".to_string(),
            menu_items: vec!["menu_item:nonexistent".to_string()],
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::MenuItemNotFound);
}

#[tokio::test]
async fn excessive_cook_time_rejected() {
    let (_tmp, db) = setup().await;
    let items = MenuItemRepository::new(db.clone());

    // A cook time this large would push the delivery estimate past the
    // representable date range, so it never gets into the catalog
    let err = items
        .create(menu_item_payload(
            "Slow Roast",
            Decimal::new(2500, 2),
            Decimal::from(1_000_000_000_000i64),
        ))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationFailed);
    assert!(items.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_city_rejected() {
    let (_tmp, db) = setup().await;
    let cities = CityRepository::new(db.clone());

    cities.create(city_payload("Miami")).await.unwrap();
    let err = cities.create(city_payload("Miami")).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::CityNameExists);
    assert_eq!(cities.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn partial_menu_item_update() {
    let (_tmp, db) = setup().await;
    let items = MenuItemRepository::new(db.clone());

    let item = items
        .create(menu_item_payload(
            "Pizza Margherita",
            Decimal::new(3599, 2),
            Decimal::from(20),
        ))
        .await
        .unwrap();
    let item_id = item.id.as_ref().unwrap().to_string();

    let updated = items
        .update(
            &item_id,
            MenuItemUpdate {
                price: Some(Decimal::new(3799, 2)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    // Only the price changed
    assert_eq!(updated.price, Decimal::new(3799, 2));
    assert_eq!(updated.name, "Pizza Margherita");
    assert_eq!(updated.time_to_cook, Decimal::from(20));
    assert_eq!(updated.ingredients, "tomato, mozzarella, basil");
}

#[tokio::test]
async fn delete_city_cascades() {
    let (_tmp, db) = setup().await;
    let (_restaurant_id, _customer_id, _item_ids) = seed_catalog(&db).await;

    let cities = CityRepository::new(db.clone());
    let restaurants = RestaurantRepository::new(db.clone());
    let categories = FoodCategoryRepository::new(db.clone());
    let items = MenuItemRepository::new(db.clone());

    let city = cities.find_by_name("Miami").await.unwrap().unwrap();
    let city_id = city.id.as_ref().unwrap().to_string();
    cities.delete(&city_id).await.unwrap();

    assert!(cities.find_all().await.unwrap().is_empty());
    assert!(restaurants.find_all().await.unwrap().is_empty());
    assert!(categories.find_all().await.unwrap().is_empty());
    assert!(items.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn customer_password_is_hashed() {
    let (_tmp, db) = setup().await;
    let (_restaurant_id, customer_id, _item_ids) = seed_catalog(&db).await;

    let customers = CustomerRepository::new(db.clone());
    let customer = customers.get_by_id(&customer_id).await.unwrap();

    assert!(customer.hash_pass.starts_with("$argon2"));
    assert!(customer.verify_password("s3cretpass").unwrap());
    assert!(!customer.verify_password("wrongpass").unwrap());
}

#[tokio::test]
async fn duplicate_customer_email_rejected() {
    let (_tmp, db) = setup().await;
    let (_restaurant_id, _customer_id, _item_ids) = seed_catalog(&db).await;

    let cities = CityRepository::new(db.clone());
    let roles = RoleRepository::new(db.clone());
    let customers = CustomerRepository::new(db.clone());

    let city = cities.find_by_name("Miami").await.unwrap().unwrap();
    let role = roles.find_by_name("regular").await.unwrap().unwrap();

    let err = customers
        .create(CustomerCreate {
            name: "Another Ana".to_string(),
            city: city.id.as_ref().unwrap().to_string(),
            address: "1 Biscayne Blvd".to_string(),
            phone: "3055550999".to_string(),
            email: "ana@example.com".to_string(),
            password: "an0therpass".to_string(),
            roles: vec![role.id.as_ref().unwrap().to_string()],
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::CustomerEmailExists);
    assert_eq!(customers.find_all().await.unwrap().len(), 1);
}
