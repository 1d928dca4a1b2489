#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    visa_form_mailer::run().await?;
    Ok(())
}
