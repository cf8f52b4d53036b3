//! Terms of the circuit graph vocabulary.

pub mod ckt {
    use oxrdf::NamedNodeRef;

    pub const NAMESPACE: &str = "http://example.org/ckt#";

    /// The class of all circuit devices.
    pub const DEVICE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/ckt#Device");
    /// Links a device to the literal label of its kind, e.g. `"PMOS"`.
    pub const TYPE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://example.org/ckt#type");
    /// Links a device to a net that one of its terminals is connected to.
    pub const CONNECTS_TO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://example.org/ckt#connectsTo");
}
