//! List-screen workflow
//!
//! Every resource screen has the same loop: fetch a page for the current
//! filters, mutate through a modal or row action, then re-fetch so the
//! table shows what the backend now holds.

use crate::api::{Ack, ApiClient, ListQuery, Page, Resource, Transport};
use crate::domain::EntityId;
use crate::error::ApiError;

/// Outcome of a successful mutation.
///
/// The mutation itself succeeded; `refreshed` carries the follow-up fetch,
/// which can still fail independently.
#[derive(Debug)]
pub struct Mutation<R> {
    pub ack: Ack,
    pub refreshed: Result<Page<R>, ApiError>,
}

pub async fn fetch_page<R: Resource, T: Transport>(
    client: &ApiClient<T>,
    query: &ListQuery,
) -> Result<Page<R>, ApiError> {
    client.list::<R>(query).await
}

/// Create (`existing == None`) or update, then re-fetch.
pub async fn save_and_refetch<R: Resource, T: Transport>(
    client: &ApiClient<T>,
    existing: Option<EntityId>,
    draft: &R::Draft,
    query: &ListQuery,
) -> Result<Mutation<R>, ApiError> {
    let ack = match existing {
        Some(id) => client.update::<R>(id, draft).await?,
        None => client.create::<R>(draft).await?,
    };
    Ok(Mutation { ack, refreshed: client.list::<R>(query).await })
}

pub async fn delete_and_refetch<R: Resource, T: Transport>(
    client: &ApiClient<T>,
    id: EntityId,
    query: &ListQuery,
) -> Result<Mutation<R>, ApiError> {
    let ack = client.delete::<R>(id).await?;
    Ok(Mutation { ack, refreshed: client.list::<R>(query).await })
}

/// Toast text for a finished mutation.
pub fn success_message<R: Resource>(ack: &Ack, verb: &str) -> String {
    ack.message_or(&format!("{} {}", R::NAME, verb))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use serde_json::{json, Value};

    use super::*;
    use crate::api::mock::{ok, MockTransport};
    use crate::api::{ApiResponse, Method, RequestBody};
    use crate::domain::{Contact, ContactDraft, Location, LocationDraft, Visit, VisitDraft};
    use crate::session::{Role, Session, TenantContext};

    /// In-memory contact backend: GET lists, POST appends, PUT replaces, DELETE removes.
    fn contact_backend() -> (MockTransport, Rc<RefCell<Vec<Value>>>) {
        let rows = Rc::new(RefCell::new(vec![json!({"id": 1, "name": "Asha", "phone": "111"})]));
        let state = rows.clone();
        let transport = MockTransport::new(move |req| {
            let mut rows = state.borrow_mut();
            let id_from_path = || {
                req.path.trim_end_matches('/').rsplit('/').next().and_then(|s| s.parse::<u64>().ok())
            };
            match (req.method, &req.body) {
                (Method::Get, _) => ok(json!({"status": 200, "data": {
                    "results": rows.clone(), "count": rows.len(), "next": null, "previous": null
                }})),
                (Method::Post, RequestBody::Json(body)) => {
                    let mut row = body.clone();
                    row["id"] = json!(rows.len() as u64 + 1);
                    rows.push(row);
                    ok(json!({"status": 201, "message": "Contact created"}))
                }
                (Method::Put, RequestBody::Json(body)) => {
                    let id = id_from_path();
                    for row in rows.iter_mut() {
                        if row["id"].as_u64() == id {
                            let mut updated = body.clone();
                            updated["id"] = row["id"].clone();
                            *row = updated;
                        }
                    }
                    ok(json!({"status": 200}))
                }
                (Method::Delete, _) => {
                    let id = id_from_path();
                    rows.retain(|row| row["id"].as_u64() != id);
                    ApiResponse { status: 204, body: String::new() }
                }
                _ => ApiResponse { status: 405, body: String::new() },
            }
        });
        (transport, rows)
    }

    fn client(transport: &MockTransport) -> ApiClient<MockTransport> {
        let session = Session {
            access_token: Some("t".into()),
            role: Role::Admin,
            user_id: Some("9".into()),
            ..Default::default()
        };
        ApiClient::new(transport.clone(), TenantContext::from_session(&session).unwrap())
    }

    fn names(page: &Page<Contact>) -> Vec<&str> {
        page.results.iter().map(|c| c.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_create_then_list_reflects_new_row() {
        let (transport, _) = contact_backend();
        let api = client(&transport);
        let query = ListQuery::paged(10);

        let before = fetch_page::<Contact, _>(&api, &query).await.unwrap();
        assert_eq!(names(&before), vec!["Asha"]);

        let draft = ContactDraft { name: "Bilal".into(), phone: "222".into(), ..Default::default() };
        let mutation = save_and_refetch::<Contact, _>(&api, None, &draft, &query).await.unwrap();
        assert_eq!(success_message::<Contact>(&mutation.ack, "saved"), "Contact created");
        assert_eq!(names(&mutation.refreshed.unwrap()), vec!["Asha", "Bilal"]);

        let methods: Vec<Method> = transport.requests().iter().map(|r| r.method).collect();
        assert_eq!(methods, vec![Method::Get, Method::Post, Method::Get]);
    }

    #[tokio::test]
    async fn test_update_then_list_reflects_change() {
        let (transport, _) = contact_backend();
        let api = client(&transport);
        let query = ListQuery::default();

        let first = fetch_page::<Contact, _>(&api, &query).await.unwrap().results.remove(0);
        let mut draft = first.draft();
        draft.name = "Asha K".into();
        let mutation = save_and_refetch::<Contact, _>(&api, Some(first.id), &draft, &query).await.unwrap();

        assert_eq!(transport.requests()[1].path, "contact-detail/9/1/");
        assert_eq!(success_message::<Contact>(&mutation.ack, "updated"), "Contact updated");
        assert_eq!(names(&mutation.refreshed.unwrap()), vec!["Asha K"]);
    }

    #[tokio::test]
    async fn test_delete_then_list_reflects_removal() {
        let (transport, rows) = contact_backend();
        let api = client(&transport);
        let mutation = delete_and_refetch::<Contact, _>(&api, 1, &ListQuery::default()).await.unwrap();
        assert!(mutation.refreshed.unwrap().is_empty());
        assert!(rows.borrow().is_empty());
        assert_eq!(success_message::<Contact>(&mutation.ack, "deleted"), "Contact deleted");
    }

    #[tokio::test]
    async fn test_failed_validation_skips_mutation_and_refetch() {
        let (transport, _) = contact_backend();
        let api = client(&transport);
        let draft = VisitDraft { title: "Audit".into(), ..Default::default() };
        let err = save_and_refetch::<Visit, _>(&api, None, &draft, &ListQuery::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref v) if v.field == "schedule_date"));

        let loc = LocationDraft { name: "X".into(), latitude: Some(-91.0), longitude: Some(0.0), ..Default::default() };
        assert!(save_and_refetch::<Location, _>(&api, Some(2), &loc, &ListQuery::default()).await.is_err());
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_refetch_failure_is_reported_separately() {
        let transport = MockTransport::new(|req| match req.method {
            Method::Post => ok(json!({"status": 201})),
            _ => ApiResponse { status: 500, body: "oops".into() },
        });
        let api = client(&transport);
        let draft = ContactDraft { name: "C".into(), phone: "3".into(), ..Default::default() };
        let mutation = save_and_refetch::<Contact, _>(&api, None, &draft, &ListQuery::default()).await.unwrap();
        assert!(matches!(mutation.refreshed, Err(ApiError::Status { status: 500, .. })));
    }
}
