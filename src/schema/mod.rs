mod provisioner;

pub use provisioner::SchemaProvisioner;
