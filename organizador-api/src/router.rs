use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, config::ApplicationSettings, routes};

pub fn create(app_state: AppState, settings: &ApplicationSettings) -> Router<()> {
    routes()
        .with_state(app_state)
        .layer(cors_layer(&settings.allowed_origins))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

fn routes() -> Router<AppState> {
    Router::new()
        .nest("/Funcionario", routes::employees::router())
        .nest("/Tarefa", routes::tasks::router())
        .nest("/HistoricoTarefa", routes::history::router())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_origin = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins = allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect::<Vec<_>>();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::LOCATION])
        .allow_origin(allow_origin)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{HeaderMap, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::{adapters::outbound::memory::InMemoryStore, factory};

    const FUTURE: &str = "2999-01-01";

    fn app() -> (Router, InMemoryStore) {
        let store = InMemoryStore::new();
        let settings = ApplicationSettings {
            port: 0,
            host: "127.0.0.1".into(),
            allowed_origins: vec![],
        };
        let app = create(factory::in_memory_state(store.clone()), &settings);
        (app, store)
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, HeaderMap, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, headers, value)
    }

    async fn create_employee(app: &Router, name: &str, phone: &str) -> i64 {
        let (status, _, body) = send(
            app,
            Method::POST,
            "/Funcionario",
            Some(json!({ "nome": name, "email": "contato@empresa.com", "telefone": phone })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }

    async fn create_task(app: &Router, title: &str, employee_id: i64) -> i64 {
        let (status, _, body) = send(
            app,
            Method::POST,
            "/Tarefa",
            Some(json!({ "titulo": title, "data": FUTURE, "funcionarioId": employee_id })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }

    // ========================================================================
    // Employees
    // ========================================================================

    #[tokio::test]
    async fn created_employee_is_reachable_at_its_location() {
        let (app, _) = app();

        let (status, headers, created) = send(
            &app,
            Method::POST,
            "/Funcionario",
            Some(json!({ "nome": "Ana", "email": "ana@empresa.com", "telefone": "(11)11111-1111" })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let location = headers[header::LOCATION].to_str().unwrap().to_string();
        assert_eq!(location, format!("/Funcionario/{}", created["id"]));

        let (status, _, fetched) = send(&app, Method::GET, &location, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
        assert_eq!(fetched["telefone"], "(11)11111-1111");
    }

    #[tokio::test]
    async fn contained_names_are_rejected_as_duplicates() {
        let (app, store) = app();
        create_employee(&app, "Ana", "11111-1111").await;

        let (status, _, body) = send(
            &app,
            Method::POST,
            "/Funcionario",
            Some(json!({ "nome": "Ana Paula", "email": "ap@empresa.com", "telefone": "22222-2222" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "Error": "Nome já existente" }));
        assert_eq!(store.employee_count(), 1);
    }

    #[tokio::test]
    async fn malformed_phones_are_rejected() {
        let (app, store) = app();

        let (status, _, body) = send(
            &app,
            Method::POST,
            "/Funcionario",
            Some(json!({ "nome": "Ana", "email": "ana@empresa.com", "telefone": "11111 1111" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["Error"],
            "Telefone está fora do formato padrão, sendo ele: 11111-1111 ou (11)11111-1111"
        );
        assert_eq!(store.employee_count(), 0);
    }

    #[tokio::test]
    async fn empty_fields_are_reported_by_name() {
        let (app, _) = app();

        let (status, _, body) = send(
            &app,
            Method::POST,
            "/Funcionario",
            Some(json!({ "nome": "Ana", "email": "", "telefone": "11111-1111" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["Error"], "E-mail não pode ser vazio");
    }

    #[tokio::test]
    async fn listing_without_employees_is_not_found() {
        let (app, _) = app();

        let (status, _, body) = send(&app, Method::GET, "/Funcionario/ObterTodos", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["Error"], "Funcionário não encontrado(a)");
    }

    #[tokio::test]
    async fn employee_searches_use_query_values() {
        let (app, _) = app();
        create_employee(&app, "Ana", "11111-1111").await;
        create_employee(&app, "Bruno", "(21)22222-2222").await;

        let (status, _, body) =
            send(&app, Method::GET, "/Funcionario/ObterPorTelefone?telefone=(21)", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["nome"], "Bruno");

        let (status, _, body) =
            send(&app, Method::GET, "/Funcionario/ObterPorNome?nome=Carla", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["Error"], "Funcionário não cadastrado(a)");

        let (status, _, body) = send(&app, Method::GET, "/Funcionario/ObterPorNome", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["Error"], "Nome não pode ser nulo(a)");
    }

    #[tokio::test]
    async fn employee_patches_and_delete() {
        let (app, _) = app();
        let id = create_employee(&app, "Ana", "11111-1111").await;

        let (status, _, _) = send(
            &app,
            Method::PATCH,
            &format!("/Funcionario/AtualizarEmail/{id}?email=nova@empresa.com"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, _, fetched) = send(&app, Method::GET, &format!("/Funcionario/{id}"), None).await;
        assert_eq!(fetched["email"], "nova@empresa.com");

        let (status, _, _) =
            send(&app, Method::DELETE, &format!("/Funcionario/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _, body) =
            send(&app, Method::DELETE, &format!("/Funcionario/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["Error"], "Funcionário não encontrado(a)");
    }

    #[tokio::test]
    async fn employee_zero_is_not_selected() {
        let (app, _) = app();

        let (status, _, body) = send(&app, Method::GET, "/Funcionario/0", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["Error"], "Funcionário não selecionado");
    }

    // ========================================================================
    // Tasks and history
    // ========================================================================

    #[tokio::test]
    async fn task_lifecycle_is_recorded_in_history() {
        let (app, store) = app();
        let employee = create_employee(&app, "Ana", "11111-1111").await;
        let task = create_task(&app, "Deploy", employee).await;

        let (status, _, _) = send(
            &app,
            Method::PATCH,
            &format!("/Tarefa/AtualizarStatus/{task}?status=Testes"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _, _) = send(
            &app,
            Method::PATCH,
            &format!("/Tarefa/AtualizarTitulo/{task}?titulo=Deploy%20final"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _, _) = send(&app, Method::DELETE, &format!("/Tarefa/{task}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(store.task_count(), 0);

        let (status, _, history) =
            send(&app, Method::GET, &format!("/HistoricoTarefa/{task}"), None).await;
        assert_eq!(status, StatusCode::OK);
        let statuses: Vec<&str> = history
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["statusTarefa"].as_str().unwrap())
            .collect();
        assert_eq!(statuses, ["Pendente", "Testes", "Testes"]);
        assert_eq!(history[0]["tarefaId"], task);
        assert_eq!(history[0]["funcionarioId"], employee);

        let (status, _, body) = send(&app, Method::GET, &format!("/Tarefa/{task}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["Error"], "Tarefa não encontrado(a)");
    }

    #[tokio::test]
    async fn task_round_trips_with_wire_names() {
        let (app, _) = app();
        let employee = create_employee(&app, "Ana", "11111-1111").await;

        let (status, headers, created) = send(
            &app,
            Method::POST,
            "/Tarefa",
            Some(json!({
                "titulo": "Revisar",
                "descricao": "Revisar o contrato",
                "data": "2999-05-06T08:30:00",
                "status": 2,
                "funcionarioId": employee
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let location = headers[header::LOCATION].to_str().unwrap().to_string();
        let (_, _, fetched) = send(&app, Method::GET, &location, None).await;

        assert_eq!(fetched, created);
        assert_eq!(fetched["data"], "2999-05-06");
        assert_eq!(fetched["status"], "Desenvolvimento");
        assert_eq!(fetched["descricao"], "Revisar o contrato");
    }

    #[tokio::test]
    async fn past_due_dates_are_rejected() {
        let (app, store) = app();

        let (status, _, body) = send(
            &app,
            Method::POST,
            "/Tarefa",
            Some(json!({ "titulo": "Atrasada", "data": "2000-01-01" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["Error"], "Data não pode ser menor que a atual");
        assert_eq!(store.task_count(), 0);
        assert!(store.all_history().is_empty());
    }

    #[tokio::test]
    async fn unassigned_tasks_cannot_change_status() {
        let (app, _) = app();
        let task = create_task(&app, "Sem dono", 0).await;

        let (status, _, body) = send(
            &app,
            Method::PATCH,
            &format!("/Tarefa/AtualizarStatus/{task}?status=Finalizado"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["Error"], "Funcionário não selecionado");

        let (status, _, body) = send(
            &app,
            Method::GET,
            &format!("/Tarefa/ObterResponsavel/{task}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["Error"], "Funcionário não selecionado");
    }

    #[tokio::test]
    async fn reassignment_resolves_the_responsible_employee() {
        let (app, store) = app();
        let employee = create_employee(&app, "Ana", "11111-1111").await;
        let task = create_task(&app, "Planejar", 0).await;

        let (status, _, _) = send(
            &app,
            Method::PATCH,
            &format!("/Tarefa/AtualizarFuncionario/{task}?idFuncionario={employee}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _, responsible) = send(
            &app,
            Method::GET,
            &format!("/Tarefa/ObterResponsavel/{task}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(responsible["nome"], "Ana");
        assert_eq!(store.all_history().len(), 2);

        let (status, _, body) = send(
            &app,
            Method::PATCH,
            &format!("/Tarefa/AtualizarFuncionario/{task}?idFuncionario=99"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["Error"], "Funcionário não encontrado(a)");
    }

    #[tokio::test]
    async fn task_queries() {
        let (app, _) = app();

        let (status, _, body) = send(&app, Method::GET, "/Tarefa/ObterTodos", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        create_task(&app, "Escrever testes", 0).await;

        let (status, _, body) = send(
            &app,
            Method::GET,
            &format!("/Tarefa/ObterPorData?data={FUTURE}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["titulo"], "Escrever testes");

        let (status, _, body) =
            send(&app, Method::GET, "/Tarefa/ObterPorStatus?status=0", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, _, body) =
            send(&app, Method::GET, "/Tarefa/ObterPorStatus?status=Testes", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["Error"], "Tarefa não encontrado(a)");

        let (status, _, body) = send(&app, Method::GET, "/Tarefa/ObterPorTitulo", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["Error"], "Título não pode ser nulo(a)");
    }

    #[tokio::test]
    async fn unknown_task_has_no_history() {
        let (app, _) = app();

        let (status, _, body) = send(&app, Method::GET, "/HistoricoTarefa/42", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["Error"], "Histórico não encontrado(a)");
    }
}
