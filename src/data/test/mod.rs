mod permitted_role;
