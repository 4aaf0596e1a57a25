//! Company and domain services.

use sentra_api::client::{ApiError, SentraClient};
use sentra_api::schema::{
    AddDomainInput, CompaniesResponse, Company, CompanyResponse, CreateCompanyInput, Domain,
    DomainResponse, MessageResponse, UpdateCompanyInput,
};
use sentra_api::validate;

pub async fn fetch_companies(client: SentraClient) -> Result<Vec<Company>, ApiError> {
    let response: CompaniesResponse = client
        .get("/api/companies", Some(validate::companies_response))
        .await?;
    Ok(response.companies)
}

pub async fn fetch_company(client: SentraClient, id: String) -> Result<Company, ApiError> {
    let response: CompanyResponse = client
        .get(&format!("/api/companies/{id}"), Some(validate::company_response))
        .await?;
    Ok(response.company)
}

pub async fn create_company(
    client: SentraClient,
    input: CreateCompanyInput,
) -> Result<Company, ApiError> {
    let response: CompanyResponse = client
        .post("/api/companies", &input, Some(validate::company_response))
        .await?;
    tracing::info!(company_id = %response.company.id, "Company created");
    Ok(response.company)
}

pub async fn update_company(
    client: SentraClient,
    id: String,
    input: UpdateCompanyInput,
) -> Result<Company, ApiError> {
    let response: CompanyResponse = client
        .put(
            &format!("/api/companies/{id}"),
            &input,
            Some(validate::company_response),
        )
        .await?;
    Ok(response.company)
}

pub async fn delete_company(client: SentraClient, id: String) -> Result<(), ApiError> {
    let _: MessageResponse = client
        .delete(&format!("/api/companies/{id}"), Some(validate::message_response))
        .await?;
    tracing::info!(company_id = %id, "Company deleted");
    Ok(())
}

pub async fn add_domain(
    client: SentraClient,
    company_id: String,
    input: AddDomainInput,
) -> Result<Domain, ApiError> {
    let response: DomainResponse = client
        .post(
            &format!("/api/companies/{company_id}/domains"),
            &input,
            Some(validate::domain_response),
        )
        .await?;
    Ok(response.domain)
}

pub async fn remove_domain(
    client: SentraClient,
    company_id: String,
    domain_id: String,
) -> Result<(), ApiError> {
    let _: MessageResponse = client
        .delete(
            &format!("/api/companies/{company_id}/domains/{domain_id}"),
            Some(validate::message_response),
        )
        .await?;
    Ok(())
}
