use std::sync::Arc;

use contactbook::{
    ClearCommand, Contact, ContactBook, ContactModel, DeleteCommand, Index, LockFlag, Logic,
    MailCommand, MailTarget, SelectCommand, UndoCommand,
};

fn contact(name: &str, phone: &str, email: &str, tags: &[&str]) -> Contact {
    Contact::parse(name, phone, email, "Kent Ridge")
        .unwrap()
        .with_tags(tags.iter().copied())
        .unwrap()
}

fn logic(flag: &LockFlag) -> Logic {
    let book = ContactBook::from_contacts([
        contact("Alice", "111", "alice@example.com", &["friends"]),
        contact("Bob", "222", "bob@example.com", &["colleagues"]),
        contact("Carl", "333", "carl@example.com", &["friends"]),
    ])
    .unwrap();
    Logic::new(ContactModel::from(book).with_locker(Arc::new(flag.clone())))
}

fn at(position: usize) -> Index {
    Index::from_one_based(position).unwrap()
}

#[test]
fn select_then_mail_the_selection() {
    let mut logic = logic(&LockFlag::new());
    let mail = MailCommand::new(MailTarget::Selection);

    assert!(logic.execute("mail", &mail).is_err());

    logic
        .execute("select 1 3", &SelectCommand::new([at(1), at(3)]).unwrap())
        .unwrap();
    let result = logic.execute("mail", &mail).unwrap();
    assert_eq!(
        result.feedback,
        "Mailing to: mailto:alice@example.com,carl@example.com"
    );

    // Deleted contacts drop out of the selection.
    logic
        .execute("delete 1", &DeleteCommand::new([at(1)]).unwrap())
        .unwrap();
    assert_eq!(
        MailCommand::new(MailTarget::Selection)
            .recipients_uri(logic.model())
            .unwrap(),
        "mailto:carl@example.com"
    );
}

#[test]
fn lock_blocks_mutations_until_released() {
    let flag = LockFlag::new();
    let mut logic = logic(&flag);
    flag.lock();

    assert!(logic.execute("clear", &ClearCommand).unwrap_err().is_locked());
    assert!(logic
        .execute("mail", &MailCommand::new(MailTarget::All))
        .unwrap_err()
        .is_locked());
    assert_eq!(logic.model().book().len(), 3);
    assert!(!logic.model().can_undo());

    flag.unlock();
    logic.execute("clear", &ClearCommand).unwrap();
    assert!(logic.model().book().is_empty());

    flag.lock();
    assert!(logic.execute("undo", &UndoCommand).unwrap_err().is_locked());
    flag.unlock();
    logic.execute("undo", &UndoCommand).unwrap();
    assert_eq!(logic.model().book().len(), 3);
    assert_eq!(logic.inputs().len(), 5);
}
