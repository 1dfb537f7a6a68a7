use super::*;

fn conversation(name: &str, message: &str) -> Conversation {
    Conversation {
        id: "conv-x".into(),
        contact_name: name.into(),
        contact_avatar: String::new(),
        last_message: message.into(),
        timestamp: "10:30".into(),
        tags: vec![Tag { id: "tag-1".into(), name: "Novo".into(), color: TagColor::Named(Palette::Green) }],
        unread_count: 2,
    }
}

// =============================================================================
// TagColor
// =============================================================================

#[test]
fn tag_color_parses_palette_names_case_insensitively() {
    assert_eq!("green".parse::<TagColor>().unwrap(), TagColor::Named(Palette::Green));
    assert_eq!("Blue".parse::<TagColor>().unwrap(), TagColor::Named(Palette::Blue));
    assert_eq!(" red ".parse::<TagColor>().unwrap(), TagColor::Named(Palette::Red));
}

#[test]
fn tag_color_parses_and_normalizes_hex() {
    assert_eq!("#ef4444".parse::<TagColor>().unwrap(), TagColor::Hex("#EF4444".into()));
}

#[test]
fn tag_color_rejects_garbage() {
    assert!("#12345".parse::<TagColor>().is_err());
    assert!("#GGGGGG".parse::<TagColor>().is_err());
    assert!("magenta".parse::<TagColor>().is_err());
    assert!("".parse::<TagColor>().is_err());
}

#[test]
fn tag_serializes_color_as_plain_string() {
    let tag = Tag { id: "tag-2".into(), name: "Urgente".into(), color: TagColor::Named(Palette::Red) };
    let json = serde_json::to_value(&tag).unwrap();
    assert_eq!(json["color"], "red");

    let back: Tag = serde_json::from_value(serde_json::json!({"id": "t", "name": "n", "color": "#00ff00"})).unwrap();
    assert_eq!(back.color, TagColor::Hex("#00FF00".into()));
}

#[test]
fn tag_deserialize_rejects_unknown_color() {
    let result = serde_json::from_value::<Tag>(serde_json::json!({"id": "t", "name": "n", "color": "teal"}));
    assert!(result.is_err());
}

// =============================================================================
// Conversation
// =============================================================================

#[test]
fn matches_lowercase_checks_name_and_message() {
    let conv = conversation("Maria Oliveira", "Podemos remarcar a demonstração?");
    assert!(conv.matches_lowercase("maria"));
    assert!(conv.matches_lowercase("remarcar"));
    assert!(!conv.matches_lowercase("contrato"));
}

#[test]
fn matches_lowercase_handles_accented_text() {
    let conv = conversation("João Silva", "Olá");
    assert!(conv.matches_lowercase("joão"));
}

#[test]
fn has_tag_matches_by_id() {
    let conv = conversation("a", "b");
    assert!(conv.has_tag("tag-1"));
    assert!(!conv.has_tag("tag-2"));
}

#[test]
fn conversation_deserialize_defaults_tags_and_unread() {
    let conv: Conversation = serde_json::from_value(serde_json::json!({
        "id": "conv-9",
        "contact_name": "Ana",
        "contact_avatar": "",
        "last_message": "oi",
        "timestamp": "Hoje"
    }))
    .unwrap();
    assert!(conv.tags.is_empty());
    assert_eq!(conv.unread_count, 0);
}

#[test]
fn patch_only_touches_provided_fields() {
    let mut conv = conversation("Maria", "oi");
    let patch = ConversationPatch { contact_name: Some("Maria O.".into()), tag_ids: Some(Vec::new()), ..Default::default() };
    let cleared: &[Tag] = &[];
    patch.apply(&mut conv, Some(cleared));
    assert_eq!(conv.contact_name, "Maria O.");
    assert_eq!(conv.last_message, "oi");
    assert!(conv.tags.is_empty());
    assert_eq!(conv.unread_count, 2);
}

// =============================================================================
// Attendants
// =============================================================================

#[test]
fn attendant_deserialize_defaults_email_role_and_permissions() {
    let json = r#"{ "id": "att-9", "name": "Ana", "avatar": "", "active": true }"#;
    let att: Attendant = serde_json::from_str(json).unwrap();
    assert_eq!(att.email, "");
    assert_eq!(att.role, Role::Attendant);
    assert!(Permission::ALL.iter().all(|p| att.permissions.allows(*p)));
}

#[test]
fn permissions_toggle_one_flag_at_a_time() {
    let mut perms = Permissions::default();
    perms.set(Permission::DeleteColumns, false);
    assert!(!perms.allows(Permission::DeleteColumns));
    assert!(perms.allows(Permission::RenameColumns));

    let json = serde_json::to_value(perms).unwrap();
    assert_eq!(json["delete_columns"], false);
    assert_eq!(serde_json::to_value(Permission::TransferConversations).unwrap(), "transfer_conversations");
}

#[test]
fn email_check_needs_at_and_dotted_domain() {
    assert!(is_valid_email("carlos@example.com"));
    assert!(!is_valid_email("carlos@example"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("carlos silva@example.com"));
    assert!(!is_valid_email(""));
}
