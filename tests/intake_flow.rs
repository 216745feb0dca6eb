use avian_listings::dashboard::{AgentDashboard, Role, StatusFilter};
use avian_listings::forms::client_request::ClientRequestField;
use avian_listings::forms::property_submission::ListingField;
use avian_listings::forms::{
    AdminLoginForm, ClientRequestWizard, ContactField, ContactForm, PropertySubmission,
};
use avian_listings::models::{PropertyStatus, PropertyType, RequestStatus};
use avian_listings::payment::{MobilizationCheckout, PaymentMethod};
use avian_listings::query::{query_listings, visible_listings, FilterSpec, PageRequest, SortOption};
use avian_listings::sources::{self, InMemoryLeadSink, LeadSink, MockCatalog};
use avian_listings::Config;
use chrono::Utc;

#[tokio::test]
async fn client_request_then_mobilization_fee() {
    let sink = InMemoryLeadSink::new();
    let mut wizard = ClientRequestWizard::new();
    wizard.set(ClientRequestField::FullName, "Mr. Tunde Bakare");
    wizard.set(ClientRequestField::Phone, "+234 800 123 4567");
    wizard.set(ClientRequestField::Email, "tunde@example.com");
    assert!(wizard.next());
    wizard.set_property_type(Some(PropertyType::Mansion));
    wizard.set(ClientRequestField::PreferredLocation, "Banana Island, Ikoyi");
    wizard.set(ClientRequestField::BudgetMin, "3000000000");
    wizard.set(ClientRequestField::BudgetMax, "4000000000");

    let submission = wizard.submit().unwrap();
    let receipt = sink.submit_client_request(&submission).await.unwrap();

    let mut checkout = MobilizationCheckout::default();
    checkout.select_method(PaymentMethod::Transfer);
    let payment = checkout.pay(&sink, &receipt.reference).await.unwrap();
    assert_eq!(payment.transaction_id, receipt.reference);

    let requests = sink.client_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].budget, "₦3B - ₦4B");
    assert_eq!(requests[0].status, RequestStatus::New);
    assert_eq!(sink.payments().await.len(), 1);
}

#[tokio::test]
async fn agent_submission_is_moderated_before_going_public() {
    let catalog = MockCatalog::new();
    let sink = InMemoryLeadSink::new();
    let agent = Role::Agent("user3".to_string());
    let agent_id = agent.require_agent().unwrap();

    let mut flow = PropertySubmission::new();
    flow.set(ListingField::Street, "12 Gerrard Road").unwrap();
    flow.set(ListingField::City, "Ikoyi").unwrap();
    flow.set(ListingField::Price, "4800000000").unwrap();
    flow.set(ListingField::Bedrooms, "5").unwrap();
    flow.set(ListingField::Bathrooms, "6").unwrap();
    flow.set(ListingField::LivingArea, "5200").unwrap();
    flow.set(ListingField::Description, "Quiet villa off Gerrard Road").unwrap();
    flow.set_property_type(Some(PropertyType::Villa)).unwrap();
    flow.add_image("https://images.example.com/gerrard.jpg").unwrap();
    flow.preview().unwrap();

    let listing = flow.submit(agent_id, Utc::now()).unwrap();
    sink.submit_property(&listing).await.unwrap();

    let admin_role = AdminLoginForm {
        email: "adebisi.a@avianre.com".to_string(),
        password: "hunter2".to_string(),
    }
    .sign_in()
    .unwrap();
    admin_role.require_admin().unwrap();

    let mut admin = catalog.admin_dashboard();
    for property in sink.properties().await {
        admin.receive_submission(property);
    }
    assert_eq!(admin.review_queue().len(), 3);

    let villas = FilterSpec {
        location: "gerrard".to_string(),
        ..Default::default()
    };
    let before: Vec<_> = admin.properties(StatusFilter::All).into_iter().cloned().collect();
    let hidden = query_listings(
        &visible_listings(&before),
        &villas,
        SortOption::NewestFirst,
        PageRequest::default(),
    );
    assert_eq!(hidden.total_count, 0);

    admin.approve(&listing.id).unwrap();
    admin.publish(&listing.id).unwrap();

    let after: Vec<_> = admin.properties(StatusFilter::All).into_iter().cloned().collect();
    let shown = query_listings(
        &visible_listings(&after),
        &villas,
        SortOption::NewestFirst,
        PageRequest::default(),
    );
    assert_eq!(shown.total_count, 1);
    assert_eq!(shown.records[0].status, PropertyStatus::ForSale);

    let dashboard = AgentDashboard::build(agent_id, &after, admin.client_requests());
    assert_eq!(dashboard.listings[0].id, listing.id);
    assert_eq!(dashboard.stats.active_listings, 3);
}

#[tokio::test]
async fn contact_enquiry_through_default_sink() {
    let sink = sources::lead_sink(&Config::default()).unwrap();
    assert_eq!(sink.sink_name(), "In-memory inbox");

    let mut form = ContactForm::new();
    form.set(ContactField::Name, "Adebisi Adebayo");
    form.set(ContactField::Email, "adebisi@example");
    form.set(ContactField::Subject, "Inquiry about Property #PROP1");
    form.set(ContactField::Message, "I would like to schedule an inspection.");
    assert_eq!(form.submit().unwrap_err().get("email"), Some("Email is invalid."));

    form.set(ContactField::Email, "adebisi@example.com");
    assert!(form.errors().is_empty());
    let enquiry = form.submit().unwrap();

    let receipt = sink.submit_contact_message(&enquiry).await.unwrap();
    assert_eq!(receipt.reference, "msg-1");
}
