mod identity_claim;
