mod meta;
pub use self::meta::{
    ExecutionContext, Intent, ListEntity, ListMetadata, ListResponse, Metadata, Reference,
};

mod error;
pub use self::error::{ErrorResponse, MessageResource};

mod file;
pub use self::file::{File, MEDIA_TYPE_UPLOAD};

mod vm;
pub use self::vm::{
    CloudInitMetadata, PowerState, PowerStateRequest, Vm, VmList, VmResources, VmRevertRequest,
    VmSpec, VmStatus,
};

mod cluster;
pub use self::cluster::{Cluster, ClusterList, ClusterNetwork, ClusterResources, ClusterSpec};

mod subnet;
pub use self::subnet::{Subnet, SubnetList, SubnetResources, SubnetSpec};

mod project;
pub use self::project::{Project, ProjectList, ProjectSpec};

mod category;
pub use self::category::{
    CategoryKey, CategoryKeyList, CategoryKeyStatus, CategoryValueList, CategoryValueStatus,
};

mod image;
pub use self::image::{Image, ImageList, ImageResources, ImageSpec};

mod task;
pub use self::task::{Task, TaskList};

mod snapshot;
pub use self::snapshot::{VmSnapshot, VmSnapshotList, VmSnapshotResources, VmSnapshotSpec};

mod availability_zone;
pub use self::availability_zone::{AvailabilityZone, AvailabilityZoneList, AvailabilityZoneSpec};

mod recovery_point;
pub use self::recovery_point::{
    VmRecoveryPoint, VmRecoveryPointList, VmRecoveryPointResources, VmRecoveryPointSpec,
};
