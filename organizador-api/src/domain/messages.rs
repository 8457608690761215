//! The fixed catalog of messages returned to API clients.

use strum::Display;
use thiserror::Error;

/// What a message is about: an entity or one of its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Subject {
    #[strum(serialize = "Funcionário")]
    Employee,
    #[strum(serialize = "Tarefa")]
    Task,
    #[strum(serialize = "Histórico")]
    History,
    #[strum(serialize = "Nome")]
    Name,
    #[strum(serialize = "E-mail")]
    Email,
    #[strum(serialize = "Telefone")]
    Phone,
    #[strum(serialize = "Título")]
    Title,
    #[strum(serialize = "Descrição")]
    Description,
    #[strum(serialize = "Data")]
    Date,
    #[strum(serialize = "Status")]
    Status,
}

/// Why a request was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("{0} não encontrado(a)")]
    NotFound(Subject),
    #[error("{0} não pode ser nulo(a)")]
    NotNull(Subject),
    #[error("{0} não pode ser vazio")]
    NotEmpty(Subject),
    #[error("{0} não cadastrado(a)")]
    NotRegistered(Subject),
    #[error("{0} já existente")]
    AlreadyExists(Subject),
    #[error("{0} não selecionado")]
    NotSelected(Subject),
    #[error("Telefone está fora do formato padrão, sendo ele: 11111-1111 ou (11)11111-1111")]
    PhoneFormat,
    #[error("Data não pode ser menor que a atual")]
    DateBeforeToday,
    #[error("A data da tarefa não pode ser menor que o mínimo")]
    DateBeforeMinimum,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subjects_are_interpolated() {
        assert_eq!(
            Rejection::NotFound(Subject::Employee).to_string(),
            "Funcionário não encontrado(a)"
        );
        assert_eq!(
            Rejection::NotEmpty(Subject::Title).to_string(),
            "Título não pode ser vazio"
        );
        assert_eq!(
            Rejection::NotSelected(Subject::Employee).to_string(),
            "Funcionário não selecionado"
        );
        assert_eq!(Rejection::AlreadyExists(Subject::Name).to_string(), "Nome já existente");
    }

    #[test]
    fn fixed_messages_are_verbatim() {
        assert_eq!(
            Rejection::DateBeforeToday.to_string(),
            "Data não pode ser menor que a atual"
        );
        assert!(Rejection::PhoneFormat
            .to_string()
            .ends_with("11111-1111 ou (11)11111-1111"));
    }
}
