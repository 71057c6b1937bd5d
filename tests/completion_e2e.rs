use contactbook::{
    AddCommand, Category, CompletionIndex, Contact, ContactBook, ContactModel, DeleteCommand,
    EditCommand, EditDescriptor, Index, Logic, Name, UndoCommand,
};

fn contact(name: &str, phone: &str, address: &str) -> Contact {
    Contact::parse(
        name,
        phone,
        &format!("{}@example.com", name.split(' ').next().unwrap().to_lowercase()),
        address,
    )
    .unwrap()
}

fn typical_logic() -> Logic {
    Logic::new(ContactModel::from(
        ContactBook::from_contacts([
            contact("Alice Pauline", "94351253", "Jurong West"),
            contact("Alex Yeoh", "87438807", "Geylang Street"),
            contact("Bernice Yu", "99272758", "Serangoon Gardens"),
        ])
        .unwrap(),
    ))
}

#[test]
fn index_scenario_with_pinned_order() {
    let mut index = CompletionIndex::new();
    index.build(Category::Name, ["Alice", "Alex", "Bob"]);
    assert_eq!(index.predict(Category::Name, "Al").unwrap(), vec!["Alex", "Alice"]);
    assert!(index.predict(Category::Name, "Z").unwrap().is_empty());
    assert!(index.predict(Category::Name, "Alicia Keys").unwrap().is_empty());
    assert!(index.predict_label("tag", "").unwrap().is_empty());
}

#[test]
fn input_box_suggestions_follow_the_cursor() {
    let logic = typical_logic();
    assert_eq!(logic.predict("de").unwrap(), vec!["delete"]);
    assert_eq!(logic.predict("find n/Al").unwrap(), vec!["Alex Yeoh", "Alice Pauline"]);
    assert_eq!(logic.predict("find p/9").unwrap(), vec!["94351253", "99272758"]);
    assert_eq!(logic.predict("find e/be").unwrap(), vec!["bernice@example.com"]);
    assert_eq!(logic.predict("find a/Ser").unwrap(), vec!["Serangoon Gardens"]);
    assert!(logic.predict("find n/al").unwrap().is_empty());
    assert!(logic.predict("delete 1").unwrap().is_empty());
}

#[test]
fn mutations_keep_suggestions_in_step() {
    let mut logic = typical_logic();

    logic
        .execute(
            "add n/Alfred",
            &AddCommand::new(contact("Alfred Lim", "81112222", "Jurong West")),
        )
        .unwrap();
    assert_eq!(
        logic.predict("find n/Al").unwrap(),
        vec!["Alex Yeoh", "Alfred Lim", "Alice Pauline"]
    );

    // Alice and Alfred share an address; deleting Alice keeps it suggested.
    logic
        .execute(
            "delete 1",
            &DeleteCommand::new([Index::from_one_based(1).unwrap()]).unwrap(),
        )
        .unwrap();
    assert_eq!(logic.predict("find a/Jur").unwrap(), vec!["Jurong West"]);
    assert_eq!(logic.predict("find n/Al").unwrap(), vec!["Alex Yeoh", "Alfred Lim"]);

    let descriptor = EditDescriptor {
        name: Some(Name::new("Alexandra Yeoh").unwrap()),
        ..EditDescriptor::default()
    };
    logic
        .execute(
            "edit 1 n/Alexandra Yeoh",
            &EditCommand::new(Index::from_one_based(1).unwrap(), descriptor).unwrap(),
        )
        .unwrap();
    assert_eq!(
        logic.predict("find n/Alex").unwrap(),
        vec!["Alexandra Yeoh"]
    );

    logic.execute("undo", &UndoCommand).unwrap();
    assert_eq!(logic.predict("find n/Alex").unwrap(), vec!["Alex Yeoh"]);
    logic.execute("undo", &UndoCommand).unwrap();
    assert_eq!(
        logic.predict("find n/Al").unwrap(),
        vec!["Alex Yeoh", "Alfred Lim", "Alice Pauline"]
    );
}

#[test]
fn malformed_query_is_invalid_argument() {
    let logic = typical_logic();
    let err = logic.predict("find n/Al\u{1b}").unwrap_err();
    assert!(err.is_validation());
}
