#[rocket::launch]
fn rocket() -> _ {
    claimdesk_api::init_logger();
    log::info!("Starting ClaimDesk API Server");
    claimdesk_api::rocket()
}
