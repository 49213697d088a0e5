//! Tests for the catalogue service.

use std::sync::Mutex;

use chrono::Utc;
use rstest::rstest;

use super::*;
use crate::domain::{ErrorCode, SERVICE_UNAVAILABLE_MESSAGE, Subcategory, SubcategoryDraft};

/// Scripted repository: serves `rows` and fails writes with `write_error`.
#[derive(Default)]
struct StubSubcategories {
    rows: Mutex<Vec<Subcategory>>,
    write_error: Option<CatalogueRepositoryError>,
}

impl StubSubcategories {
    fn failing(error: CatalogueRepositoryError) -> Self {
        Self {
            rows: Mutex::default(),
            write_error: Some(error),
        }
    }

    fn position(&self, id: i32) -> Option<usize> {
        let rows = self.rows.lock().expect("rows lock");
        rows.iter().position(|row| row.subcategory_id == id)
    }
}

#[async_trait]
impl CatalogueRepository<Subcategory> for StubSubcategories {
    async fn list(&self) -> Result<Vec<Subcategory>, CatalogueRepositoryError> {
        Ok(self.rows.lock().expect("rows lock").clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Subcategory>, CatalogueRepositoryError> {
        let rows = self.rows.lock().expect("rows lock");
        Ok(rows.iter().find(|row| row.subcategory_id == id).cloned())
    }

    async fn insert(
        &self,
        draft: &SubcategoryDraft,
    ) -> Result<Subcategory, CatalogueRepositoryError> {
        if let Some(error) = &self.write_error {
            return Err(error.clone());
        }
        let mut rows = self.rows.lock().expect("rows lock");
        let now = Utc::now();
        let row = Subcategory {
            subcategory_id: i32::try_from(rows.len()).expect("small table") + 1,
            category_id: draft.category_id(),
            name: draft.name().to_owned(),
            create_at: now,
            update_at: now,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: i32,
        draft: &SubcategoryDraft,
    ) -> Result<Option<Subcategory>, CatalogueRepositoryError> {
        if let Some(error) = &self.write_error {
            return Err(error.clone());
        }
        let Some(index) = self.position(id) else {
            return Ok(None);
        };
        let mut rows = self.rows.lock().expect("rows lock");
        let row = &mut rows[index];
        row.name = draft.name().to_owned();
        row.category_id = draft.category_id();
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool, CatalogueRepositoryError> {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };
        self.rows.lock().expect("rows lock").remove(index);
        Ok(true)
    }
}

fn service(repo: StubSubcategories) -> CatalogueService<Subcategory, StubSubcategories> {
    CatalogueService::new(Arc::new(repo))
}

fn draft(name: &str) -> SubcategoryDraft {
    SubcategoryDraft::try_new(1, name).expect("valid draft")
}

#[tokio::test]
async fn create_then_get_returns_the_stored_record() {
    let service = service(StubSubcategories::default());
    let created = service.create(draft("Spark plugs")).await.expect("create");
    let fetched = service.get(created.subcategory_id).await.expect("get");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_missing_record_is_not_found() {
    let err = service(StubSubcategories::default())
        .get(3)
        .await
        .expect_err("missing");
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "subcategory 3 not found");
}

#[tokio::test]
async fn update_and_delete_missing_record_are_not_found() {
    let service = service(StubSubcategories::default());
    let update = service.update(8, draft("Belts")).await.expect_err("missing");
    let delete = service.delete(8).await.expect_err("missing");
    assert_eq!(update.code(), ErrorCode::NotFound);
    assert_eq!(delete.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn delete_removes_record() {
    let service = service(StubSubcategories::default());
    let created = service.create(draft("Hoses")).await.expect("create");
    service.delete(created.subcategory_id).await.expect("delete");
    assert!(service.list().await.expect("list").is_empty());
}

#[rstest]
#[case(CatalogueRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(CatalogueRepositoryError::query("syntax"), ErrorCode::InternalError)]
#[case(CatalogueRepositoryError::missing_reference("fk"), ErrorCode::InvalidRequest)]
#[case(CatalogueRepositoryError::duplicate("pkey"), ErrorCode::Conflict)]
#[tokio::test]
async fn write_failures_map_to_domain_codes(
    #[case] failure: CatalogueRepositoryError,
    #[case] expected: ErrorCode,
) {
    let err = service(StubSubcategories::failing(failure))
        .create(draft("Gaskets"))
        .await
        .expect_err("write fails");
    assert_eq!(err.code(), expected);
}

#[rstest]
fn connection_message_hides_storage_details() {
    let err = map_catalogue_error(CatalogueRepositoryError::connection(
        "connection to server at \"db.internal\" (10.0.0.5) failed",
    ));
    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    assert_eq!(err.message(), SERVICE_UNAVAILABLE_MESSAGE);
}

#[rstest]
fn missing_reference_message_hides_constraint_names() {
    let err = map_catalogue_error(CatalogueRepositoryError::missing_reference(
        "subcategories_category_id_fkey",
    ));
    assert_eq!(err.message(), "referenced record does not exist");
}

#[tokio::test]
async fn deleting_a_referenced_record_is_conflict() {
    let service = service(StubSubcategories::default());
    let created = service.create(draft("Filters")).await.expect("create");
    let blocked = CatalogueService::<Subcategory, _>::new(Arc::new(ReferencedRows(created)));
    let err = blocked.delete(1).await.expect_err("still referenced");
    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(err.message(), "subcategory 1 is still referenced");
}

/// Repository whose rows are all referenced from the level below.
struct ReferencedRows(Subcategory);

#[async_trait]
impl CatalogueRepository<Subcategory> for ReferencedRows {
    async fn list(&self) -> Result<Vec<Subcategory>, CatalogueRepositoryError> {
        Ok(vec![self.0.clone()])
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<Subcategory>, CatalogueRepositoryError> {
        Ok(Some(self.0.clone()))
    }

    async fn insert(
        &self,
        _draft: &SubcategoryDraft,
    ) -> Result<Subcategory, CatalogueRepositoryError> {
        Err(CatalogueRepositoryError::query("read only"))
    }

    async fn update(
        &self,
        _id: i32,
        _draft: &SubcategoryDraft,
    ) -> Result<Option<Subcategory>, CatalogueRepositoryError> {
        Err(CatalogueRepositoryError::query("read only"))
    }

    async fn delete(&self, _id: i32) -> Result<bool, CatalogueRepositoryError> {
        Err(CatalogueRepositoryError::missing_reference(
            "parts_subcategory_id_fkey",
        ))
    }
}
